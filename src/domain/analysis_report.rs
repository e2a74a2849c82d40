pub const RESULT_SEPARATOR: &str = "\n\n---\n\n";
const FALLBACK_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    Analyzed(String),
    Failed { reason: String },
}

impl ChunkOutcome {
    pub fn analysis(&self) -> Option<&str> {
        match self {
            Self::Analyzed(text) => Some(text),
            Self::Failed { .. } => None,
        }
    }
}

/// Per-chunk outcomes of one analysis run, in chunk order, plus the optional
/// synthesis produced when more than one chunk succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    outcomes: Vec<ChunkOutcome>,
    summary: Option<String>,
}

impl AnalysisReport {
    pub fn new(outcomes: Vec<ChunkOutcome>) -> Self {
        Self {
            outcomes,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn outcomes(&self) -> &[ChunkOutcome] {
        &self.outcomes
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.outcomes.iter().filter_map(ChunkOutcome::analysis).collect()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.analysis().is_some()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn all_failed(&self) -> bool {
        self.success_count() == 0
    }

    pub fn needs_summary(&self) -> bool {
        self.success_count() > 1
    }

    /// Successful chunk analyses joined for the synthesis call.
    pub fn joined_results(&self) -> String {
        self.successes().join(RESULT_SEPARATOR)
    }

    pub fn render(&self) -> String {
        let successes = self.successes();
        match (successes.len(), &self.summary) {
            (0, _) => String::new(),
            (1, _) => successes[0].to_string(),
            (_, Some(summary)) => format!(
                "Summary of Analysis:\n{}\n\nDetailed Results:\n{}",
                summary,
                successes.join(RESULT_SEPARATOR)
            ),
            (_, None) => successes.join(FALLBACK_SEPARATOR),
        }
    }
}
