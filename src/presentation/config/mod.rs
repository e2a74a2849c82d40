mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AnalysisSettings, AuthSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings,
    Settings,
};
