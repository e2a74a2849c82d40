use crate::domain::AnalysisType;

const FACTUAL_ACCURACY_VERIFICATION: &str = include_str!("prompts/factual_accuracy_verification.txt");
const SOURCE_VERIFICATION: &str = include_str!("prompts/source_verification.txt");
const DETAIL_VERIFICATION: &str = include_str!("prompts/detail_verification.txt");
const TECHNICAL_DETAIL_VERIFICATION: &str =
    include_str!("prompts/technical_detail_verification.txt");

/// System prompt for the call that condenses several chunk analyses.
pub const SUMMARY_PROMPT: &str = "Provide a concise, comprehensive summary of the following analysis results. \
Extract the key points, highlight main insights, and consolidate the information into a clear, coherent overview.";

pub fn lookup(analysis_type: AnalysisType) -> &'static str {
    match analysis_type {
        AnalysisType::FactualAccuracyVerification => FACTUAL_ACCURACY_VERIFICATION,
        AnalysisType::SourceVerification => SOURCE_VERIFICATION,
        AnalysisType::DetailVerification => DETAIL_VERIFICATION,
        AnalysisType::TechnicalDetailVerification => TECHNICAL_DETAIL_VERIFICATION,
    }
}

/// Resolves a raw identifier, falling back to factual accuracy verification.
pub fn lookup_identifier(identifier: &str) -> &'static str {
    lookup(AnalysisType::from_identifier(identifier))
}
