use std::sync::Arc;

use async_trait::async_trait;

use veracity::application::ports::{LlmClientError, TextSplitter, TextSplitterError};
use veracity::application::services::{AnalysisService, SUMMARY_PROMPT, prompt_catalog};
use veracity::domain::{AnalysisType, Chunk, ChunkOutcome, DocumentId};
use veracity::infrastructure::llm::MockLlmClient;
use veracity::infrastructure::text_processing::TokenSplitter;

/// Treats every `|`-separated segment as one chunk.
struct PipeSplitter;

#[async_trait]
impl TextSplitter for PipeSplitter {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
        _max_tokens: usize,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        Ok(text
            .split('|')
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(i, s)| Chunk::new(s.to_string(), document_id, i, 1))
            .collect())
    }
}

struct FailingSplitter;

#[async_trait]
impl TextSplitter for FailingSplitter {
    async fn split(
        &self,
        _text: &str,
        _document_id: DocumentId,
        _max_tokens: usize,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        Err(TextSplitterError::TokenizationFailed("boom".to_string()))
    }
}

fn service(llm: Arc<MockLlmClient>) -> AnalysisService<MockLlmClient, PipeSplitter> {
    AnalysisService::new(llm, Arc::new(PipeSplitter), 10_000)
}

fn ok(text: &str) -> Result<String, LlmClientError> {
    Ok(text.to_string())
}

#[tokio::test]
async fn given_single_chunk_when_analyzing_then_returns_its_analysis_without_summary() {
    let llm = Arc::new(MockLlmClient::with_script(vec![ok("  Accurate.  ")]));

    let report = service(llm.clone())
        .analyze("The sky is blue.", AnalysisType::DetailVerification, 700)
        .await;

    assert_eq!(report.render(), "Accurate.");
    assert!(report.summary().is_none());

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].system_prompt,
        prompt_catalog::lookup(AnalysisType::DetailVerification)
    );
    assert_eq!(calls[0].user_message, "The sky is blue.");
    assert_eq!(calls[0].max_tokens, 700);
}

#[tokio::test]
async fn given_chunks_when_analyzing_then_calls_llm_in_chunk_order() {
    let llm = Arc::new(MockLlmClient::with_script(vec![
        ok("A"),
        ok("B"),
        ok("C"),
        ok("Summary"),
    ]));

    service(llm.clone())
        .analyze("one|two|three", AnalysisType::SourceVerification, 100)
        .await;

    let messages: Vec<String> = llm.calls().into_iter().map(|c| c.user_message).collect();
    assert_eq!(messages[..3], ["one", "two", "three"]);
}

#[tokio::test]
async fn given_two_successes_when_analyzing_then_prepends_summary() {
    let llm = Arc::new(MockLlmClient::with_script(vec![
        ok("A"),
        ok("B"),
        ok("The gist."),
    ]));

    let report = service(llm.clone())
        .analyze("one|two", AnalysisType::FactualAccuracyVerification, 100)
        .await;

    assert_eq!(
        report.render(),
        "Summary of Analysis:\nThe gist.\n\nDetailed Results:\nA\n\n---\n\nB"
    );

    let calls = llm.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2].system_prompt, SUMMARY_PROMPT);
    assert_eq!(calls[2].user_message, "A\n\n---\n\nB");
}

#[tokio::test]
async fn given_one_success_among_failures_when_analyzing_then_returns_it_without_summary() {
    let llm = Arc::new(MockLlmClient::with_script(vec![
        Err(LlmClientError::RateLimited),
        ok("Only this one."),
        Err(LlmClientError::EmptyResponse),
    ]));

    let report = service(llm.clone())
        .analyze("one|two|three", AnalysisType::FactualAccuracyVerification, 100)
        .await;

    assert_eq!(report.render(), "Only this one.");
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 2);
    assert_eq!(llm.calls().len(), 3);
}

#[tokio::test]
async fn given_every_chunk_failing_when_analyzing_then_renders_empty() {
    let llm = Arc::new(MockLlmClient::with_script(vec![
        Err(LlmClientError::ApiRequestFailed("HTTP 500".to_string())),
        Err(LlmClientError::RateLimited),
    ]));

    let report = service(llm.clone())
        .analyze("one|two", AnalysisType::TechnicalDetailVerification, 100)
        .await;

    assert!(report.all_failed());
    assert_eq!(report.render(), "");
    assert_eq!(llm.calls().len(), 2);
}

#[tokio::test]
async fn given_blank_completion_when_analyzing_then_counts_chunk_as_failed() {
    let llm = Arc::new(MockLlmClient::with_script(vec![ok("   \n")]));

    let report = service(llm)
        .analyze("one", AnalysisType::FactualAccuracyVerification, 100)
        .await;

    assert!(matches!(report.outcomes()[0], ChunkOutcome::Failed { .. }));
    assert_eq!(report.render(), "");
}

#[tokio::test]
async fn given_failed_summary_when_analyzing_then_joins_results_plainly() {
    let llm = Arc::new(MockLlmClient::with_script(vec![
        ok("A"),
        ok("B"),
        Err(LlmClientError::RateLimited),
    ]));

    let report = service(llm)
        .analyze("one|two", AnalysisType::FactualAccuracyVerification, 100)
        .await;

    assert!(report.summary().is_none());
    assert_eq!(report.render(), "A\n\nB");
}

#[tokio::test]
async fn given_empty_text_when_analyzing_then_makes_no_calls() {
    let llm = Arc::new(MockLlmClient::new());

    let report = service(llm.clone())
        .analyze("", AnalysisType::FactualAccuracyVerification, 100)
        .await;

    assert!(report.outcomes().is_empty());
    assert_eq!(report.render(), "");
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn given_splitter_error_when_analyzing_then_returns_empty_report() {
    let llm = Arc::new(MockLlmClient::new());
    let service = AnalysisService::new(llm.clone(), Arc::new(FailingSplitter), 10_000);

    let report = service
        .analyze("anything", AnalysisType::FactualAccuracyVerification, 100)
        .await;

    assert_eq!(report.render(), "");
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn given_text_longer_than_chunk_size_when_analyzing_then_sends_each_token_window() {
    let llm = Arc::new(MockLlmClient::new());
    let service = AnalysisService::new(llm.clone(), Arc::new(TokenSplitter::new()), 8);
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(4);

    let report = service
        .analyze(&text, AnalysisType::FactualAccuracyVerification, 100)
        .await;

    let calls = llm.calls();
    let chunk_calls = &calls[..calls.len() - 1];
    assert!(chunk_calls.len() > 1);
    assert_eq!(
        chunk_calls
            .iter()
            .map(|c| c.user_message.as_str())
            .collect::<String>(),
        text
    );
    assert_eq!(calls.last().unwrap().system_prompt, SUMMARY_PROMPT);
    assert!(report.render().starts_with("Summary of Analysis:\n"));
}
