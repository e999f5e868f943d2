//! Structured extraction client: builds the role-tagged turns, runs the
//! completion call under the retry policy, and parses the JSON response.

use std::sync::Arc;

use tradewire_core::TradeExtraction;

use crate::prompt::{IMAGE_SYSTEM_PROMPT, TEXT_SYSTEM_PROMPT};
use crate::provider::{
    ChatRequest, CompletionProvider, ContentPart, ImageDetail, ProviderError, TurnContent,
};
use crate::retry::{Exhausted, RetryPolicy};

/// Sampling temperature. Low, to bias toward deterministic well-formed JSON.
const TEMPERATURE: f32 = 0.2;

/// Cap on the disambiguating text hint attached to image extractions.
pub const IMAGE_CONTEXT_MAX: usize = 2000;

pub type ExtractResult = Result<TradeExtraction, Exhausted<ProviderError>>;

pub struct Extractor {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    policy: RetryPolicy,
}

impl Extractor {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: String) -> Self {
        Self {
            provider,
            model,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extract trade intel from a text blob.
    pub async fn extract_text(&self, text: &str) -> ExtractResult {
        let req = ChatRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            system: TEXT_SYSTEM_PROMPT.to_string(),
            user: TurnContent::Text(text.to_string()),
        };
        self.run(req).await
    }

    /// Extract trade intel from a chart image, optionally passing surrounding
    /// message text (capped at [`IMAGE_CONTEXT_MAX`] chars) to disambiguate
    /// labels on the chart.
    pub async fn extract_image(&self, image_url: &str, context: Option<&str>) -> ExtractResult {
        let mut parts = vec![ContentPart::ImageUrl {
            url: image_url.to_string(),
            detail: ImageDetail::High,
        }];
        if let Some(hint) = context.filter(|c| !c.trim().is_empty()) {
            parts.push(ContentPart::Text {
                text: truncate_chars(hint, IMAGE_CONTEXT_MAX),
            });
        }

        let req = ChatRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            system: IMAGE_SYSTEM_PROMPT.to_string(),
            user: TurnContent::Parts(parts),
        };
        self.run(req).await
    }

    async fn run(&self, req: ChatRequest) -> ExtractResult {
        let provider = self.provider.as_ref();
        let req = &req;
        self.policy
            .run(move || async move {
                let raw = provider.complete(req).await?;
                parse_extraction(&raw)
            })
            .await
    }
}

/// Parse the raw assistant text into a [`TradeExtraction`], tolerating
/// surrounding whitespace and code-fence markers.
pub fn parse_extraction(raw: &str) -> Result<TradeExtraction, ProviderError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(cleaned).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Models occasionally wrap JSON in code fences despite the response-format
/// directive; strip them before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```") {
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest.trim_end();
    }
    s
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
