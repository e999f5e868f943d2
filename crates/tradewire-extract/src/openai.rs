use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::provider::{ChatRequest, CompletionProvider, ContentPart, ProviderError, TurnContent};

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com".to_string()),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, req: &ChatRequest) -> Result<String, ProviderError> {
        let body = build_request_body(req);
        let url = format!("{}/v1/chat/completions", self.base_url);

        debug!(model = %req.model, "sending request to OpenAI");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status == 429 {
            let retry = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|s| s * 1000) // convert seconds to ms
                .unwrap_or(5000);
            return Err(ProviderError::RateLimited {
                retry_after_ms: retry,
            });
        }

        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(status, body = %text, "OpenAI API error");
            return Err(ProviderError::Api {
                status,
                message: text,
            });
        }

        let api_resp: ApiResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let content = api_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}

/// Build the chat-completions body. `response_format` pins the model to a
/// bare JSON object; the low temperature biases toward well-formed output.
fn build_request_body(req: &ChatRequest) -> serde_json::Value {
    let user_content = match &req.user {
        TurnContent::Text(text) => serde_json::json!(text),
        TurnContent::Parts(parts) => {
            let parts: Vec<serde_json::Value> = parts
                .iter()
                .map(|p| match p {
                    ContentPart::Text { text } => serde_json::json!({
                        "type": "text",
                        "text": text,
                    }),
                    ContentPart::ImageUrl { url, detail } => serde_json::json!({
                        "type": "image_url",
                        "image_url": { "url": url, "detail": detail.as_str() },
                    }),
                })
                .collect();
            serde_json::json!(parts)
        }
    };

    serde_json::json!({
        "model": req.model,
        "temperature": req.temperature,
        "response_format": { "type": "json_object" },
        "messages": [
            { "role": "system", "content": req.system },
            { "role": "user", "content": user_content },
        ],
    })
}

// OpenAI API response types (private — deserialization only)

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
