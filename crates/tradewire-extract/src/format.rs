//! Renders a [`TradeExtraction`] into the fixed multi-line summary posted to
//! the outbound channel.

use tradewire_core::types::{is_blank, TradeExtraction};

/// Rendered in place of absent/blank values.
const PLACEHOLDER: &str = "—";

/// When at least this many of the five primary fields are empty, the raw
/// JSON is appended after the summary so a reviewer can see what the model
/// actually returned.
const SPARSE_FIELD_THRESHOLD: usize = 3;

/// Fixed-layout human-readable summary.
///
/// Every field gets its own labelled line with a placeholder when absent,
/// except `levels` and `rationale`: their lines are omitted entirely when
/// absent. Confidence renders as a whole-number percentage, missing → 0.
pub fn format_trade_summary(extraction: &TradeExtraction) -> String {
    let mut lines = Vec::new();
    lines.push("📈 **Trade Idea Summary**".to_string());
    lines.push(format!("• Ticker: {}", field(&extraction.ticker)));
    lines.push(format!(
        "• Bias: {}  |  Confidence: {}%",
        field(&extraction.bias),
        (extraction.confidence * 100.0).round() as i64
    ));
    lines.push(format!("• Entry: {}", field(&extraction.entry)));
    lines.push(format!(
        "• SL: {}  |  TP: {}",
        field(&extraction.stop_loss),
        field(&extraction.take_profit)
    ));
    lines.push(format!(
        "• Exit cond.: {}",
        field(&extraction.exit_conditions)
    ));
    if !is_blank(&extraction.levels) {
        lines.push(format!("• Levels: {}", field(&extraction.levels)));
    }
    if !is_blank(&extraction.rationale) {
        lines.push(format!("• Notes: {}", field(&extraction.rationale)));
    }
    lines.join("\n")
}

/// Summary plus the transparency fallback: when the extraction is mostly
/// empty, append the pretty-printed JSON after a divider.
pub fn render_payload(extraction: &TradeExtraction) -> String {
    let summary = format_trade_summary(extraction);
    if extraction.primary_empty_count() >= SPARSE_FIELD_THRESHOLD {
        let json = serde_json::to_string_pretty(extraction)
            .unwrap_or_else(|_| "{}".to_string());
        format!("{summary}\n\n—\nJSON:\n{json}")
    } else {
        summary
    }
}

fn field(value: &Option<String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_extraction() -> TradeExtraction {
        TradeExtraction {
            ticker: Some("BTCUSD".to_string()),
            entry: Some("42000-42200".to_string()),
            stop_loss: Some("41500".to_string()),
            take_profit: Some("44000".to_string()),
            exit_conditions: Some("close below 41800 on 4h".to_string()),
            bias: Some("bullish".to_string()),
            levels: Some("S: 41500, R: 44000".to_string()),
            rationale: Some("breakout retest holding".to_string()),
            confidence: 0.87,
        }
    }

    #[test]
    fn populated_fields_appear_verbatim_with_rounded_percentage() {
        let extraction = full_extraction();
        let rendered = format_trade_summary(&extraction);

        for value in [
            "BTCUSD",
            "42000-42200",
            "41500",
            "44000",
            "close below 41800 on 4h",
            "bullish",
            "S: 41500, R: 44000",
            "breakout retest holding",
        ] {
            assert!(rendered.contains(value), "missing {value:?} in:\n{rendered}");
        }
        assert!(rendered.contains("87%"));
    }

    #[test]
    fn confidence_rounds_to_nearest_whole_percent() {
        let mut extraction = full_extraction();
        extraction.confidence = 0.675;
        assert!(format_trade_summary(&extraction).contains("68%"));
        extraction.confidence = 0.0;
        assert!(format_trade_summary(&extraction).contains("0%"));
    }

    #[test]
    fn absent_fields_render_as_placeholder() {
        let extraction = TradeExtraction {
            ticker: Some("ETH".to_string()),
            ..Default::default()
        };
        let rendered = format_trade_summary(&extraction);
        assert!(rendered.contains("• Entry: —"));
        assert!(rendered.contains("• SL: —  |  TP: —"));
        assert!(rendered.contains("• Exit cond.: —"));
    }

    #[test]
    fn levels_and_rationale_lines_are_omitted_when_absent() {
        let extraction = TradeExtraction {
            ticker: Some("ETH".to_string()),
            ..Default::default()
        };
        let rendered = format_trade_summary(&extraction);
        assert!(!rendered.contains("• Levels:"));
        assert!(!rendered.contains("• Notes:"));

        let with_levels = TradeExtraction {
            levels: Some("S: 2900".to_string()),
            rationale: Some("range low".to_string()),
            ..extraction
        };
        let rendered = format_trade_summary(&with_levels);
        assert!(rendered.contains("• Levels: S: 2900"));
        assert!(rendered.contains("• Notes: range low"));
    }

    #[test]
    fn sparse_extraction_appends_raw_json_after_divider() {
        // All five primary fields empty.
        let extraction = TradeExtraction {
            rationale: Some("nothing actionable".to_string()),
            ..Default::default()
        };
        let payload = render_payload(&extraction);
        assert!(payload.contains("\n\n—\nJSON:\n"));
        assert!(payload.contains("\"rationale\": \"nothing actionable\""));
    }

    #[test]
    fn two_empty_primaries_do_not_trigger_the_fallback() {
        let mut extraction = full_extraction();
        extraction.ticker = None;
        extraction.bias = Some("".to_string());
        let payload = render_payload(&extraction);
        assert!(!payload.contains("JSON:"));
    }

    #[test]
    fn three_empty_primaries_trigger_the_fallback() {
        let mut extraction = full_extraction();
        extraction.ticker = None;
        extraction.bias = None;
        extraction.entry = Some("   ".to_string());
        let payload = render_payload(&extraction);
        assert!(payload.contains("JSON:"));
    }
}
