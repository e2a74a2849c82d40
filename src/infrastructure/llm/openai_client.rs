use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions client for OpenAI and API-compatible providers.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    auth: AuthScheme,
    api_version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScheme {
    Bearer,
    ApiKeyHeader,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    /// Bearer-authenticated client rooted at `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            auth: AuthScheme::Bearer,
            api_version: None,
        }
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = match self.auth {
            AuthScheme::ApiKeyHeader => request.header("api-key", &self.api_key),
            AuthScheme::Bearer => request.header("Authorization", format!("Bearer {}", self.api_key)),
        };

        match &self.api_version {
            Some(version) => request.query(&[("api-version", version)]),
            None => request,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, system_prompt, user_message), fields(model = %self.model))]
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            max_tokens,
        };

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let choice = completion_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))?;

        match choice.message.content {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(LlmClientError::EmptyResponse),
        }
    }
}

pub fn create_llm_client(settings: &LlmSettings) -> Result<OpenAiClient, LlmClientError> {
    let http_client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .map_err(|e| LlmClientError::Configuration(e.to_string()))?;

    let client = match settings.provider {
        LlmProvider::OpenAi => {
            OpenAiClient::new(OPENAI_BASE_URL, &settings.api_key, &settings.chat_model)
        }
        LlmProvider::LmStudio => {
            let base_url = settings.base_url.as_deref().ok_or_else(|| {
                LlmClientError::Configuration("base_url required for lmstudio provider".to_string())
            })?;
            OpenAiClient::new(base_url, &settings.api_key, &settings.chat_model)
        }
        LlmProvider::Azure => {
            let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                LlmClientError::Configuration(
                    "azure_endpoint required for azure provider".to_string(),
                )
            })?;
            let base_url = format!(
                "{}/openai/deployments/{}",
                endpoint.trim_end_matches('/'),
                settings.chat_model
            );
            OpenAiClient {
                auth: AuthScheme::ApiKeyHeader,
                api_version: Some(settings.azure_api_version.clone()),
                ..OpenAiClient::new(base_url, &settings.api_key, &settings.chat_model)
            }
        }
    };

    if settings.api_key.is_empty() && settings.provider != LlmProvider::LmStudio {
        tracing::warn!(provider = ?settings.provider, "LLM api_key is empty, requests will be rejected");
    }

    Ok(client.with_http_client(http_client))
}
