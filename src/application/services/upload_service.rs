use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, TextSplitter};
use crate::application::services::AnalysisService;
use crate::domain::{AnalysisReport, AnalysisType, Document};

pub struct UploadService<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    analysis_service: Arc<AnalysisService<L, T>>,
    max_output_tokens: u32,
}

impl<F, L, T: ?Sized> UploadService<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub fn new(
        file_loader: Arc<F>,
        analysis_service: Arc<AnalysisService<L, T>>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            file_loader,
            analysis_service,
            max_output_tokens,
        }
    }

    /// Extracts the document's text and runs the selected analysis over it.
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = %document.format_tag,
        )
    )]
    pub async fn process(
        &self,
        data: &[u8],
        document: Document,
        analysis_type: AnalysisType,
    ) -> Result<AnalyzedDocument, UploadError> {
        let original_text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(UploadError::Extraction)?;

        tracing::info!(chars = original_text.len(), "Text extracted");

        let report = self
            .analysis_service
            .analyze(&original_text, analysis_type, self.max_output_tokens)
            .await;

        if report.all_failed() && !report.outcomes().is_empty() {
            tracing::warn!(
                chunks = report.outcomes().len(),
                "Every chunk analysis failed, returning empty analysis"
            );
        }

        Ok(AnalyzedDocument {
            analysis: report.render(),
            document,
            original_text,
            report,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub document: Document,
    pub original_text: String,
    pub analysis: String,
    pub report: AnalysisReport,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Error processing file: {0}")]
    Extraction(#[from] FileLoaderError),
}
