//! Literal command interception. These bypass the extraction pipeline and
//! reply directly on Discord.

/// Fixed liveness reply for `/status`.
pub const STATUS_REPLY: &str = "✅ Relay online — listening for trade alerts.";

/// Returns the canned reply when `content` is a known command.
pub fn handle_command(content: &str) -> Option<&'static str> {
    match content.trim() {
        "/ping" => Some("pong"),
        "/status" => Some(STATUS_REPLY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_replies_pong() {
        assert_eq!(handle_command("/ping"), Some("pong"));
        assert_eq!(handle_command("  /ping  "), Some("pong"));
    }

    #[test]
    fn status_replies_fixed_liveness_line() {
        assert_eq!(handle_command("/status"), Some(STATUS_REPLY));
    }

    #[test]
    fn anything_else_is_not_a_command() {
        assert_eq!(handle_command("/pingpong"), None);
        assert_eq!(handle_command("ping"), None);
        assert_eq!(handle_command("long BTC /ping"), None);
    }
}
