use reqwest::StatusCode;

use super::query_error::QueryError;
use super::{QueryRequest, QueryResult, RagClient, ReasoningDepth};
use crate::session::SessionId;

impl RagClient {
    /// Ask the RAG service a question.
    ///
    /// Always returns display-ready content: HTTP errors, unreachable hosts,
    /// timeouts and malformed bodies all come back as a [`QueryResult`]
    /// whose `answer` explains what went wrong and whose `sources` is `None`.
    pub async fn ask(
        &self,
        question: &str,
        depth: ReasoningDepth,
        session: &SessionId,
    ) -> QueryResult {
        match self.try_ask(question, depth, session).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(session = %session, error = %e, "query failed");
                e.into()
            }
        }
    }

    async fn try_ask(
        &self,
        question: &str,
        depth: ReasoningDepth,
        session: &SessionId,
    ) -> Result<QueryResult, QueryError> {
        let payload = QueryRequest {
            question,
            max_iterations: depth,
            session_id: session.as_str(),
        };

        tracing::debug!(session = %session, depth = depth.get(), url = %self.query_url, "sending query");

        let response = self.client
            .post(self.query_url.clone())
            .timeout(self.query_timeout)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QueryError::Status(status.as_u16()));
        }

        let result: QueryResult = response.json().await?;
        tracing::debug!(session = %session, has_sources = result.sources.is_some(), "query answered");
        Ok(result)
    }
}
