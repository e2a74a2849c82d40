mod analysis_service;
pub mod prompt_catalog;
mod token_counter;
mod upload_service;

pub use analysis_service::AnalysisService;
pub use prompt_catalog::SUMMARY_PROMPT;
pub use token_counter::{count_tokens, tokenizer};
pub use upload_service::{AnalyzedDocument, UploadError, UploadService};
