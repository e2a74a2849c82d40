use async_trait::async_trait;

use crate::domain::{Chunk, DocumentId};

#[async_trait]
pub trait TextSplitter: Send + Sync {
    /// Splits `text` into ordered chunks of at most `max_tokens` tokens each.
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
        max_tokens: usize,
    ) -> Result<Vec<Chunk>, TextSplitterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("tokenization failed: {0}")]
    TokenizationFailed(String),
    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(usize),
}
