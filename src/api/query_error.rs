use std::error::Error as StdError;
use thiserror::Error;

use super::QueryResult;

/// Why a query produced no usable answer. Never leaves the api module:
/// `RagClient::ask` folds it into a [`QueryResult`].
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("server unreachable: {0}")]
    Unreachable(reqwest::Error),

    #[error("{}", describe(.0))]
    Unexpected(reqwest::Error),
}

impl From<reqwest::Error> for QueryError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            QueryError::Unreachable(error)
        } else {
            QueryError::Unexpected(error)
        }
    }
}

impl From<QueryError> for QueryResult {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Status(code) => {
                QueryResult::notice(format!("⚠️ Server Error ({code}). Please try again."))
            }
            QueryError::Unreachable(_) => QueryResult::notice(
                "⚠️ Unable to contact the server. Please check your internet connection.",
            ),
            QueryError::Unexpected(e) => QueryResult::notice(format!(
                "⚠️ An unexpected error occurred: {}",
                describe(&e)
            )),
        }
    }
}

/// reqwest keeps the useful part ("operation timed out", "expected value at
/// line 1") in the source chain, so flatten it.
fn describe(error: &(dyn StdError + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_embeds_code() {
        let result = QueryResult::from(QueryError::Status(503));
        assert!(result.answer.contains("503"));
        assert_eq!(result.sources, None);
    }

    #[test]
    fn test_describe_walks_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
        let outer = std::io::Error::new(std::io::ErrorKind::Other, inner);
        assert!(describe(&outer).contains("operation timed out"));
    }
}
