use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Default heartbeat cadence (seconds).
pub const HEARTBEAT_INTERVAL_SECS: u64 = 300;

/// Top-level config (tradewire.toml + TRADEWIRE_* env overrides).
///
/// Nested keys use a double underscore in env vars, e.g.
/// `TRADEWIRE_DISCORD__BOT_TOKEN`, `TRADEWIRE_TELEGRAM__CHAT_ID`,
/// `TRADEWIRE_OPENAI__API_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub discord: DiscordConfig,
    pub telegram: TelegramConfig,
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    pub bot_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Numeric chat id the rendered summaries are delivered to.
    pub chat_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeartbeatConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_heartbeat_interval")]
    pub interval_secs: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: HEARTBEAT_INTERVAL_SECS,
        }
    }
}

fn bool_true() -> bool {
    true
}
fn default_heartbeat_interval() -> u64 {
    HEARTBEAT_INTERVAL_SECS
}
fn default_model() -> String {
    "gpt-4o".to_string()
}
fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

impl RelayConfig {
    /// Load config from a TOML file with TRADEWIRE_* env var overrides.
    ///
    /// Missing required settings (bot tokens, API key, chat id) fail the
    /// load; the error names the offending key but never echoes values.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path.unwrap_or("tradewire.toml");

        let config: RelayConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("TRADEWIRE_").split("__"))
            .extract()
            .map_err(|e| crate::error::RelayError::Config(e.to_string()))?;

        Ok(config)
    }
}
