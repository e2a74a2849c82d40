use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Dispatch table from a document's format to the adapter that reads it.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Loader for every supported format: `txt`, `docx` and `pdf`.
    pub fn with_default_adapters() -> Self {
        let adapters = vec![
            (DocumentFormat::Text, Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::WordProcessor, Arc::new(DocxAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Pdf, Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>),
        ];
        Self::new(adapters)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = document
            .format()
            .and_then(|format| self.adapters.get(&format))
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(document.format_tag.clone()))?;

        adapter.extract_text(data, document).await
    }
}
