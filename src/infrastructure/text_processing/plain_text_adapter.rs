use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format() != Some(DocumentFormat::Text) {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format_tag.clone(),
            ));
        }

        String::from_utf8(data.to_vec()).map_err(|e| FileLoaderError::Decode(e.to_string()))
    }
}
