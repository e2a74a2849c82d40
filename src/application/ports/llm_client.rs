use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs a two-message exchange and returns the first choice's content.
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("empty response from provider")]
    EmptyResponse,
    #[error("client misconfigured: {0}")]
    Configuration(String),
}
