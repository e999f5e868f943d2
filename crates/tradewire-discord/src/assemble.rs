//! Best-effort text assembly from heterogeneous message shapes.
//!
//! Trade alerts arrive as plain content, as rich embeds, or as replies to an
//! earlier alert. Assembly gathers whatever text exists (content first, then
//! embed text, then the replied-to message) into one newline-joined blob for
//! extraction. The core is pure and works on a platform-neutral embed shape;
//! the serenity-facing wrapper converts and resolves the one-hop reply.

use serenity::http::Http;
use serenity::model::channel::{Embed, Message};
use tracing::debug;

/// Cap on the assembled blob handed to the extraction client.
pub const MAX_ASSEMBLED_LEN: usize = 6000;

/// Platform-neutral embed text.
#[derive(Debug, Clone, Default)]
pub struct EmbedText {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<(String, String)>,
    pub footer: Option<String>,
}

/// Assemble one text blob: content, then each embed's title / description /
/// `name: value` fields / footer, then the replied-to message's text. Blank
/// segments are dropped; the result is truncated to `max_len` characters.
pub fn assemble(
    content: &str,
    embeds: &[EmbedText],
    parent: Option<&str>,
    max_len: usize,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_segment(&mut parts, content);
    for embed in embeds {
        push_opt(&mut parts, &embed.title);
        push_opt(&mut parts, &embed.description);
        for (name, value) in &embed.fields {
            let name = name.trim();
            let value = value.trim();
            match (name.is_empty(), value.is_empty()) {
                (true, true) => {}
                (false, true) => parts.push(name.to_string()),
                (true, false) => parts.push(value.to_string()),
                (false, false) => parts.push(format!("{name}: {value}")),
            }
        }
        push_opt(&mut parts, &embed.footer);
    }
    if let Some(parent) = parent {
        push_segment(&mut parts, parent);
    }

    truncate_chars(&parts.join("\n"), max_len)
}

/// Assemble the full text for a live message, resolving its one-hop reply.
pub async fn assemble_message(http: &Http, msg: &Message) -> String {
    let embeds: Vec<EmbedText> = msg.embeds.iter().map(embed_text).collect();
    let parent = resolve_parent(http, msg).await;
    assemble(&msg.content, &embeds, parent.as_deref(), MAX_ASSEMBLED_LEN)
}

/// Convert a serenity embed into the neutral shape.
pub fn embed_text(embed: &Embed) -> EmbedText {
    EmbedText {
        title: embed.title.clone(),
        description: embed.description.clone(),
        fields: embed
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect(),
        footer: embed.footer.as_ref().map(|f| f.text.clone()),
    }
}

/// Resolve the text of the message this one replies to. One hop only, never
/// the whole chain. Lookup failures are swallowed; assembly proceeds with
/// whatever was already gathered.
async fn resolve_parent(http: &Http, msg: &Message) -> Option<String> {
    // The gateway often ships the referenced message inline.
    if let Some(parent) = msg.referenced_message.as_deref() {
        return Some(parent_text(parent));
    }

    let reference = msg.message_reference.as_ref()?;
    let message_id = reference.message_id?;
    match http.get_message(reference.channel_id, message_id).await {
        Ok(parent) => Some(parent_text(&parent)),
        Err(e) => {
            debug!(error = %e, "reply lookup failed, continuing without parent");
            None
        }
    }
}

fn parent_text(parent: &Message) -> String {
    let embeds: Vec<EmbedText> = parent.embeds.iter().map(embed_text).collect();
    assemble(&parent.content, &embeds, None, MAX_ASSEMBLED_LEN)
}

fn push_segment(parts: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

fn push_opt(parts: &mut Vec<String>, segment: &Option<String>) {
    if let Some(s) = segment {
        push_segment(parts, s);
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_and_reply_text_appear_in_order_on_own_lines() {
        let embeds = vec![EmbedText {
            title: Some("T".to_string()),
            description: Some("D".to_string()),
            ..Default::default()
        }];
        let assembled = assemble("", &embeds, Some("P"), MAX_ASSEMBLED_LEN);
        assert_eq!(assembled, "T\nD\nP");
    }

    #[test]
    fn content_comes_before_embed_text() {
        let embeds = vec![EmbedText {
            title: Some("Alert".to_string()),
            ..Default::default()
        }];
        let assembled = assemble("long BTC", &embeds, None, MAX_ASSEMBLED_LEN);
        assert_eq!(assembled, "long BTC\nAlert");
    }

    #[test]
    fn embed_fields_render_name_colon_value_without_empty_separators() {
        let embeds = vec![EmbedText {
            fields: vec![
                ("Entry".to_string(), "42000".to_string()),
                ("".to_string(), "orphan value".to_string()),
                ("orphan name".to_string(), "  ".to_string()),
                ("  ".to_string(), "".to_string()),
            ],
            footer: Some("via scanner".to_string()),
            ..Default::default()
        }];
        let assembled = assemble("", &embeds, None, MAX_ASSEMBLED_LEN);
        assert_eq!(
            assembled,
            "Entry: 42000\norphan value\norphan name\nvia scanner"
        );
    }

    #[test]
    fn blank_segments_are_dropped() {
        let embeds = vec![EmbedText {
            title: Some("   ".to_string()),
            description: None,
            ..Default::default()
        }];
        let assembled = assemble("  ", &embeds, Some(""), MAX_ASSEMBLED_LEN);
        assert_eq!(assembled, "");
    }

    #[test]
    fn output_is_truncated_to_the_configured_maximum() {
        let content = "x".repeat(50);
        let assembled = assemble(&content, &[], Some("parent"), 20);
        assert_eq!(assembled.chars().count(), 20);
        assert!(assembled.chars().all(|c| c == 'x'));
    }

    #[test]
    fn multiple_embeds_keep_their_relative_order() {
        let embeds = vec![
            EmbedText {
                title: Some("first".to_string()),
                ..Default::default()
            },
            EmbedText {
                title: Some("second".to_string()),
                ..Default::default()
            },
        ];
        let assembled = assemble("", &embeds, None, MAX_ASSEMBLED_LEN);
        assert_eq!(assembled, "first\nsecond");
    }
}
