use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, TextSplitter};
use crate::application::services::prompt_catalog::{self, SUMMARY_PROMPT};
use crate::domain::{AnalysisReport, AnalysisType, ChunkOutcome, DocumentId};

/// Splits extracted text into token-bounded chunks, runs the selected
/// verification prompt over each chunk in order, and condenses multi-chunk
/// results with one extra summary call.
pub struct AnalysisService<L, T: ?Sized>
where
    L: LlmClient,
    T: TextSplitter,
{
    llm_client: Arc<L>,
    text_splitter: Arc<T>,
    max_chunk_tokens: usize,
}

impl<L, T: ?Sized> AnalysisService<L, T>
where
    L: LlmClient,
    T: TextSplitter,
{
    pub fn new(llm_client: Arc<L>, text_splitter: Arc<T>, max_chunk_tokens: usize) -> Self {
        Self {
            llm_client,
            text_splitter,
            max_chunk_tokens,
        }
    }

    /// Never fails: chunk and summary failures are recorded in the report.
    #[tracing::instrument(skip(self, text), fields(analysis_type = %analysis_type, text_len = text.len()))]
    pub async fn analyze(
        &self,
        text: &str,
        analysis_type: AnalysisType,
        max_output_tokens: u32,
    ) -> AnalysisReport {
        let chunks = match self
            .text_splitter
            .split(text, DocumentId::new(), self.max_chunk_tokens)
            .await
        {
            Ok(chunks) => chunks,
            Err(e) => {
                tracing::error!(error = %e, "Failed to split text into chunks");
                return AnalysisReport::default();
            }
        };

        tracing::info!(
            chunk_count = chunks.len(),
            total_tokens = chunks.iter().map(|c| c.token_count).sum::<usize>(),
            "Text split into chunks"
        );

        let prompt = prompt_catalog::lookup(analysis_type);
        let mut outcomes = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            let outcome = match self.complete_trimmed(prompt, &chunk.text, max_output_tokens).await {
                Ok(analysis) => ChunkOutcome::Analyzed(analysis),
                Err(e) => {
                    tracing::warn!(
                        chunk_index = chunk.index,
                        token_count = chunk.token_count,
                        error = %e,
                        "Chunk analysis failed, skipping chunk"
                    );
                    ChunkOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let report = AnalysisReport::new(outcomes);

        tracing::info!(
            succeeded = report.success_count(),
            failed = report.failure_count(),
            "Chunk analysis complete"
        );

        if !report.needs_summary() {
            return report;
        }

        match self
            .complete_trimmed(SUMMARY_PROMPT, &report.joined_results(), max_output_tokens)
            .await
        {
            Ok(summary) => report.with_summary(summary),
            Err(e) => {
                tracing::warn!(error = %e, "Summary generation failed, returning unsummarized results");
                report
            }
        }
    }

    async fn complete_trimmed(
        &self,
        system_prompt: &str,
        user_message: &str,
        max_output_tokens: u32,
    ) -> Result<String, LlmClientError> {
        let content = self
            .llm_client
            .complete(system_prompt, user_message, max_output_tokens)
            .await?;

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(LlmClientError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}
