// Completion Provider Service
// Implements the DeepSeek chat-completions API call (OpenAI-compatible wire)

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Instant;
use thiserror::Error;

const DEEPSEEK_DEFAULT_URL: &str = "https://api.deepseek.com/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 80;
const DEFAULT_MAX_TOKENS: i32 = 2000;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("Missing content in response")]
    MissingContent,
    #[error("JSON parse error: {0}")]
    JsonError(String),
    #[error("API key not configured")]
    MissingApiKey,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: i32,
    temperature: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResult {
    pub content: String,
    pub latency_ms: i64,
}

#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    completions_url: String,
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        let completions_url =
            env::var("DEEPSEEK_API_URL").unwrap_or_else(|_| DEEPSEEK_DEFAULT_URL.to_string());
        Self {
            client,
            completions_url,
        }
    }

    pub fn with_url(completions_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            completions_url,
        }
    }

    /// Single-attempt chat completion. No retry policy: callers decide
    /// whether to fall back.
    pub async fn chat(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f64,
    ) -> Result<ChatResult, ProviderError> {
        let api_key = get_api_key("deepseek").ok_or(ProviderError::MissingApiKey)?;

        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature,
        };

        let start = Instant::now();

        let response = self
            .client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as i64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::JsonError(e.to_string()))?;

        let content = data
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or(ProviderError::MissingContent)?;

        Ok(ChatResult {
            content,
            latency_ms,
        })
    }
}

/// Get API key from environment or config file
pub fn get_api_key(provider: &str) -> Option<String> {
    let env_keys = match provider {
        "deepseek" => vec!["DEEPSEEK_API_KEY", "TEXTMORPH_DEEPSEEK_API_KEY"],
        "gptzero" => vec!["GPTZERO_API_KEY"],
        "originality" => vec!["ORIGINALITY_API_KEY"],
        _ => vec![],
    };

    for key in env_keys {
        if let Ok(val) = env::var(key) {
            let v = val.trim();
            if !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }

    if let Some(config_dir) = super::ConfigStore::default_config_dir() {
        let store = super::ConfigStore::new(config_dir);
        if let Ok(Some(key)) = store.get_api_key(provider) {
            return Some(key);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_chat_parses_completion() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("Authorization", "Bearer test-key")
                .json_body_partial(r#"{"model":"deepseek-chat"}"#);
            then.status(200).json_body(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": "rewritten text" } }]
            }));
        });

        std::env::set_var("DEEPSEEK_API_KEY", "test-key");
        let client = ProviderClient::with_url(server.url("/v1/chat/completions"));
        let result = client
            .chat("deepseek-chat", "system prompt", "user text", 0.7)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(result.content, "rewritten text");
    }

    #[tokio::test]
    async fn test_chat_surfaces_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429).body("rate limited");
        });

        std::env::set_var("DEEPSEEK_API_KEY", "test-key");
        let client = ProviderClient::with_url(server.url("/v1/chat/completions"));
        let err = client
            .chat("deepseek-chat", "system", "user", 0.7)
            .await
            .unwrap_err();
        match err {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_chat_missing_content() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(serde_json::json!({ "choices": [] }));
        });

        std::env::set_var("DEEPSEEK_API_KEY", "test-key");
        let client = ProviderClient::with_url(server.url("/v1/chat/completions"));
        let err = client
            .chat("deepseek-chat", "system", "user", 0.7)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingContent));
    }
}
