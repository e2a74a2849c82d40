use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Page texts in page order, one line break after each page, trimmed.
    /// A page that cannot be read fails the whole document.
    pub fn join_page_texts<E: fmt::Display>(
        pages: impl IntoIterator<Item = Result<String, E>>,
    ) -> Result<String, FileLoaderError> {
        let mut text = String::new();

        for (page_index, page) in pages.into_iter().enumerate() {
            let page_text = page.map_err(|e| {
                FileLoaderError::Format(format!(
                    "failed to extract text from page {}: {e}",
                    page_index + 1
                ))
            })?;
            text.push_str(&page_text);
            text.push('\n');
        }

        Ok(text.trim().to_string())
    }

    fn extract_pages(path: &Path) -> Result<(usize, String), FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::Format(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| FileLoaderError::Format(format!("failed to read page count: {e}")))?;

        let text = Self::join_page_texts((0..page_count).map(|i| doc.extract_text(i)))?;

        Ok((page_count, text))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format() != Some(DocumentFormat::Pdf) {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format_tag.clone(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| FileLoaderError::Format(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(data)
            .map_err(|e| FileLoaderError::Format(format!("failed to write temp file: {e}")))?;

        let temp_path = temp_file.path().to_path_buf();

        let (page_count, text) = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::Format("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::Format(format!("task join error: {e}")))??;

        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
