use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

/// Default model served by the default endpoint.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

// Deterministic sampling request; determinism is not guaranteed by providers.
const TEMPERATURE: f32 = 0.0;

/// One completion to be sent to the provider.
///
/// Constructed fresh per user action; holds no connection state.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            temperature: TEMPERATURE,
        }
    }
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Client for OpenAI-compatible chat-completion endpoints.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Sends one completion request and waits for the full response text.
    ///
    /// One call per user action: no retries, no backoff, no streaming.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is unreachable, when the provider
    /// responds with a non-success status (auth failure, rate limit, model
    /// error; the provider's message is included), or when the response body
    /// carries no choices.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed(&request.prompt),
            }],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse API response")?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("API response contained no choices")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_zero_temperature() {
        let request = CompletionRequest::new("prompt".to_string(), "model".to_string());
        assert_eq!(request.temperature, 0.0);
    }

    #[test]
    fn test_wire_request_shape() {
        let chat_request = ChatCompletionRequest {
            model: "llama3-70b-8192",
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed("translate this"),
            }],
            temperature: 0.0,
        };

        let json = serde_json::to_value(&chat_request).unwrap();
        assert_eq!(json["model"], "llama3-70b-8192");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "translate this");
        assert_eq!(json["temperature"], 0.0);
    }

    #[test]
    fn test_wire_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "hello");
    }

    #[test]
    fn test_wire_response_without_choices() {
        let body = r#"{"choices":[]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert!(response.choices.is_empty());
    }
}
