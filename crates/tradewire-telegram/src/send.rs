//! Outbound delivery to Telegram.
//!
//! Telegram's message limit is 4096 characters; payloads are split at 4000.
//! Chunking is lossless: the chunks concatenated in order reproduce the
//! payload exactly.

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::debug;

use tradewire_core::error::{RelayError, Result};
use tradewire_core::types::OutboundSink;

/// Maximum characters per outbound message.
pub const CHUNK_MAX: usize = 4000;

/// Split `text` into in-order chunks of at most [`CHUNK_MAX`] characters.
///
/// Splits fall on char boundaries and nothing is trimmed or inserted, so
/// `chunks.concat() == text` always holds.
pub fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in text.chars() {
        if count == CHUNK_MAX {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Telegram outbound sink: delivers rendered summaries to one fixed chat.
pub struct TelegramSender {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSender {
    pub fn new(bot_token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(bot_token),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl OutboundSink for TelegramSender {
    /// Send `text` to the configured chat in ≤4000-char chunks, in order.
    ///
    /// A 100ms delay between consecutive chunks avoids Telegram rate limits.
    /// The first failed chunk aborts the rest; the caller logs and drops.
    async fn deliver(&self, text: &str) -> Result<()> {
        let chunks = split_chunks(text);
        debug!(chunks = chunks.len(), chars = text.len(), "delivering to Telegram");

        for (i, chunk) in chunks.iter().enumerate() {
            self.bot
                .send_message(self.chat_id, chunk)
                .await
                .map_err(|e| RelayError::Outbound(e.to_string()))?;

            if i + 1 < chunks.len() {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }

        Ok(())
    }
}
