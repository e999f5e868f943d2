use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// Structured trade intel extracted from one message or one chart image.
///
/// Every descriptive field is optional: the model may return null or omit
/// keys entirely. Unknown keys are ignored on read; a missing or non-numeric
/// `confidence` is coerced to 0.0 rather than failing the whole unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeExtraction {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<String>,
    #[serde(default)]
    pub take_profit: Option<String>,
    #[serde(default)]
    pub exit_conditions: Option<String>,
    #[serde(default)]
    pub bias: Option<String>,
    #[serde(default)]
    pub levels: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default, deserialize_with = "confidence_or_zero")]
    pub confidence: f64,
}

impl TradeExtraction {
    /// Count how many of the five primary fields (ticker, entry, stop_loss,
    /// take_profit, bias) are absent or blank.
    pub fn primary_empty_count(&self) -> usize {
        [
            &self.ticker,
            &self.entry,
            &self.stop_loss,
            &self.take_profit,
            &self.bias,
        ]
        .iter()
        .filter(|f| is_blank(f))
        .count()
    }
}

/// `true` when the field is absent or contains only whitespace.
pub fn is_blank(field: &Option<String>) -> bool {
    match field {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

fn confidence_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Seam for the outbound chat platform.
///
/// The relay only ever needs "send this text to the configured target".
#[async_trait]
pub trait OutboundSink: Send + Sync {
    async fn deliver(&self, text: &str) -> crate::error::Result<()>;
}
