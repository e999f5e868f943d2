//! Serenity event handler, the inbound edge of the relay.

use std::sync::{Arc, OnceLock};

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::prelude::{Context, EventHandler};
use tracing::{info, warn};

use tradewire_core::TradeExtraction;
use tradewire_extract::format;

use crate::assemble;
use crate::attach;
use crate::commands;
use crate::context::RelayAppContext;

/// Serenity event handler wired to the extraction pipeline.
pub struct DiscordHandler<C: RelayAppContext + 'static> {
    pub ctx: Arc<C>,
    pub bot_id: OnceLock<UserId>,
}

#[async_trait]
impl<C: RelayAppContext + 'static> EventHandler for DiscordHandler<C> {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.bot_id.set(ready.user.id).ok();
        info!(name = %ready.user.name, "Discord bot connected");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Never react to ourselves or to other bots: feedback loop guard.
        if should_ignore(
            msg.author.bot,
            msg.author.id.get(),
            self.bot_id.get().map(|id| id.get()),
        ) {
            return;
        }

        let content = msg.content.trim().to_string();

        // Literal commands bypass the pipeline and reply in place.
        if let Some(reply) = commands::handle_command(&content) {
            if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
                warn!(error = %e, "command reply failed");
            }
            return;
        }

        let images: Vec<String> = msg
            .attachments
            .iter()
            .filter(|a| attach::is_image_attachment(a))
            .map(|a| a.url.clone())
            .collect();

        if content.is_empty() && msg.embeds.is_empty() && images.is_empty() {
            return;
        }

        // Process off the event loop so retry sleeps never block new events.
        let app = Arc::clone(&self.ctx);
        let http = Arc::clone(&ctx.http);
        tokio::spawn(async move {
            process_message(app, http, msg, images).await;
        });
    }
}

/// `true` when the author is a bot, or is this relay itself.
fn should_ignore(author_is_bot: bool, author_id: u64, self_id: Option<u64>) -> bool {
    author_is_bot || self_id.is_some_and(|id| id == author_id)
}

/// Run every unit of one inbound event: the assembled text, then each image.
/// Units are independent; a failed unit is logged and dropped, and never
/// aborts its siblings. Nothing in here can take the relay down.
async fn process_message<C: RelayAppContext>(
    ctx: Arc<C>,
    http: Arc<serenity::http::Http>,
    msg: Message,
    images: Vec<String>,
) {
    let text = assemble::assemble_message(&http, &msg).await;

    if !text.trim().is_empty() {
        info!(preview = %preview(&text), "text unit received");
        match ctx.extractor().extract_text(&text).await {
            Ok(extraction) => dispatch(ctx.as_ref(), &extraction).await,
            Err(e) => {
                warn!(error = %e, preview = %preview(&text), "text unit dropped");
            }
        }
    }

    let hint = (!text.trim().is_empty()).then_some(text.as_str());
    for url in &images {
        info!(url = %url, "image unit received");
        match ctx.extractor().extract_image(url, hint).await {
            Ok(extraction) => dispatch(ctx.as_ref(), &extraction).await,
            Err(e) => {
                warn!(error = %e, url = %url, "image unit dropped");
            }
        }
    }
}

/// Render and deliver one extraction. Dispatch failures are logged, never
/// retried; the unit is silently dropped from the outbound channel.
async fn dispatch<C: RelayAppContext>(ctx: &C, extraction: &TradeExtraction) {
    let payload = format::render_payload(extraction);
    if let Err(e) = ctx.outbound().deliver(&payload).await {
        warn!(error = %e, "outbound dispatch failed");
    }
}

/// Truncated content preview for log lines.
fn preview(text: &str) -> String {
    const PREVIEW_LEN: usize = 80;
    let mut p: String = text.chars().take(PREVIEW_LEN).collect();
    if text.chars().count() > PREVIEW_LEN {
        p.push('…');
    }
    p.replace('\n', " ")
}
