use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::application::services::tokenizer;
use crate::domain::{Chunk, DocumentId};

/// Fixed-size token windows over the `cl100k_base` encoding of the text.
///
/// Windows never overlap and decode back to contiguous slices of the input,
/// so joining the chunk texts reproduces the original string. A window whose
/// last token ends partway through a multi-byte character is shortened to the
/// previous character boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenSplitter;

impl TokenSplitter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextSplitter for TokenSplitter {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
        max_tokens: usize,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        if max_tokens == 0 {
            return Err(TextSplitterError::InvalidChunkSize(max_tokens));
        }

        let bpe = tokenizer();
        let tokens = bpe.encode_ordinary(text);
        let mut chunks = Vec::with_capacity(tokens.len().div_ceil(max_tokens));
        let mut start = 0;

        while start < tokens.len() {
            let limit = (start + max_tokens).min(tokens.len());
            let end = window_end(start, limit, tokens.len(), |end| {
                bpe.decode(tokens[start..end].to_vec()).is_ok()
            })
            .ok_or_else(|| {
                TextSplitterError::TokenizationFailed(format!(
                    "tokens from {start} do not decode to valid UTF-8"
                ))
            })?;

            let chunk_text = bpe
                .decode(tokens[start..end].to_vec())
                .map_err(|e| TextSplitterError::TokenizationFailed(e.to_string()))?;

            chunks.push(Chunk::new(chunk_text, document_id, chunks.len(), end - start));
            start = end;
        }

        Ok(chunks)
    }
}

/// Longest window `start..end` with `end <= limit` that decodes cleanly. When
/// none does, the window grows past `limit` until it does.
fn window_end(
    start: usize,
    limit: usize,
    len: usize,
    decodes: impl Fn(usize) -> bool,
) -> Option<usize> {
    (start + 1..=limit)
        .rev()
        .find(|&end| decodes(end))
        .or_else(|| (limit + 1..=len).find(|&end| decodes(end)))
}
