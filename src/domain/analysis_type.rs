use std::fmt;

/// Which verification pass to run over a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisType {
    #[default]
    FactualAccuracyVerification,
    SourceVerification,
    DetailVerification,
    TechnicalDetailVerification,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::FactualAccuracyVerification,
        AnalysisType::SourceVerification,
        AnalysisType::DetailVerification,
        AnalysisType::TechnicalDetailVerification,
    ];

    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier {
            "factual_accuracy_verification" => Some(Self::FactualAccuracyVerification),
            "source_verification" => Some(Self::SourceVerification),
            "detail_verification" => Some(Self::DetailVerification),
            "technical_detail_verification" => Some(Self::TechnicalDetailVerification),
            _ => None,
        }
    }

    /// Unknown identifiers resolve to factual accuracy verification.
    pub fn from_identifier(identifier: &str) -> Self {
        Self::parse(identifier).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FactualAccuracyVerification => "factual_accuracy_verification",
            Self::SourceVerification => "source_verification",
            Self::DetailVerification => "detail_verification",
            Self::TechnicalDetailVerification => "technical_detail_verification",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
