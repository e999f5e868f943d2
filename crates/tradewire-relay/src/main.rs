use std::sync::Arc;

use tracing::info;

use tradewire_core::config::RelayConfig;
use tradewire_core::types::OutboundSink;
use tradewire_discord::{DiscordAdapter, RelayAppContext};
use tradewire_extract::{Extractor, OpenAiProvider};
use tradewire_telegram::TelegramSender;

mod heartbeat;

/// Concrete dependency bundle handed to the Discord handler.
struct AppContext {
    extractor: Extractor,
    outbound: TelegramSender,
}

impl RelayAppContext for AppContext {
    fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    fn outbound(&self) -> &dyn OutboundSink {
        &self.outbound
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tradewire_relay=info,tradewire_discord=info,tradewire_telegram=info,tradewire_extract=info"
                    .into()
            }),
        )
        .init();

    // Config: explicit path via TRADEWIRE_CONFIG > ./tradewire.toml, with
    // TRADEWIRE_* env overrides. Missing required settings abort startup;
    // the error names the key, never the value.
    let config_path = std::env::var("TRADEWIRE_CONFIG").ok();
    let config = RelayConfig::load(config_path.as_deref())?;

    let provider = Arc::new(OpenAiProvider::new(
        config.openai.api_key.clone(),
        Some(config.openai.base_url.clone()),
    ));
    let extractor = Extractor::new(provider, config.openai.model.clone());
    let outbound = TelegramSender::new(&config.telegram.bot_token, config.telegram.chat_id);

    let ctx = Arc::new(AppContext {
        extractor,
        outbound,
    });

    if config.heartbeat.enabled {
        tokio::spawn(heartbeat::run(config.heartbeat.interval_secs));
    }

    info!(
        model = %config.openai.model,
        chat_id = config.telegram.chat_id,
        "starting relay"
    );

    DiscordAdapter::new(&config.discord, ctx).run().await;
    Ok(())
}
