use super::{ApiHealth, RagClient};

impl RagClient {
    /// GET the service root with a short timeout. Advisory only.
    pub async fn probe_health(&self) -> ApiHealth {
        match self.client
            .get(self.root_url.clone())
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => ApiHealth::Connected,
            Ok(response) => {
                tracing::debug!(status = response.status().as_u16(), "health probe got non-success status");
                ApiHealth::Unstable
            }
            Err(e) => {
                tracing::debug!(error = %e, "health probe failed");
                ApiHealth::Unreachable
            }
        }
    }
}
