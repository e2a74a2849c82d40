use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub analysis: AnalysisSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "lmstudio")]
    LmStudio,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub chat_model: String,
    pub max_tokens: u32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub max_chunk_tokens: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

/// Credential pair gating `/login`. The password is stored only as a
/// lower-case hex SHA-256 digest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password_sha256: Option<String>,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{env}.toml` and `APP_*`
    /// variables (`APP_LLM__API_KEY`). `OPENAI_API_KEY` seeds `llm.api_key`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            builder = builder.set_default("llm.api_key", api_key)?;
        }

        builder
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.api_key", "")?
            .set_default("llm.azure_api_version", "2024-06-01")?
            .set_default("llm.chat_model", "gpt-3.5-turbo")?
            .set_default("llm.max_tokens", 1500)?
            .set_default("llm.request_timeout_secs", 120)?
            .set_default("analysis.max_chunk_tokens", 10000)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
                max_upload_mb: 25,
            },
            llm: LlmSettings {
                provider: LlmProvider::OpenAi,
                api_key: String::new(),
                base_url: None,
                azure_endpoint: None,
                azure_api_version: "2024-06-01".to_string(),
                chat_model: "gpt-3.5-turbo".to_string(),
                max_tokens: 1500,
                request_timeout_secs: 120,
            },
            analysis: AnalysisSettings {
                max_chunk_tokens: 10000,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                json: false,
            },
            auth: AuthSettings::default(),
        }
    }
}
