// API client module: a small blocking HTTP client for the OpenAI
// chat-completions endpoint. The program makes exactly one request per
// run, so a synchronous client keeps the flow easy to follow.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// System message sent with every request; fixes the assistant persona.
const SYSTEM_PROMPT: &str = "You are a professional business and technical analyst.";

/// Default endpoint base; overridable through `OPENAI_BASE_URL` for
/// OpenAI-compatible providers.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model; overridable through `OPENAI_MODEL`.
const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Configuration for the report client, resolved once at startup so the
/// client can be constructed with injected values in tests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ClientConfig {
    /// Read configuration from the environment, loading a `.env` file
    /// first if one is present. A missing API key fails here, at
    /// startup, instead of surfacing mid-run as a confusing HTTP error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set; add it to the environment or a .env file")?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Ok(ClientConfig {
            api_key,
            base_url,
            model,
        })
    }
}

/// Failure modes of a single completion call. Callers branch on the
/// variant instead of inspecting message text.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The request never produced a usable HTTP response, or the
    /// response body could not be read or parsed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    /// A well-formed response that contains no choices.
    #[error("completion response contained no choices")]
    EmptyResponse,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for generating one analysis report per call.
pub struct ReportClient {
    client: Client,
    config: ClientConfig,
}

impl ReportClient {
    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Build a client from an explicit configuration (used by tests and
    /// by `from_env`).
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ReportClient { client, config })
    }

    /// Send the prompt to the chat-completions endpoint and return the
    /// content of the first choice. Blocks until the API responds.
    pub fn generate(&self, prompt: &str) -> Result<String, ReportError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                Message {
                    role: "user".into(),
                    content: prompt.into(),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(ReportError::Api { status, body });
        }

        let mut parsed: ChatResponse = response.json()?;
        if parsed.choices.is_empty() {
            return Err(ReportError::EmptyResponse);
        }
        Ok(parsed.choices.remove(0).message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_takes_first_choice() {
        let raw = r##"{
            "choices": [
                {"message": {"role": "assistant", "content": "# Report"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"##;
        let mut parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices.remove(0).message.content, "# Report");
    }

    #[test]
    fn request_serializes_system_then_user() {
        let request = ChatRequest {
            model: "gpt-4.1-mini".into(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                Message {
                    role: "user".into(),
                    content: "hello".into(),
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4.1-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = ReportError::Api {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "invalid api key".into(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("invalid api key"));
    }
}
