//! Line rendering: badges, hints, labelled values, and the sensitive
//! highlight used by preview and the interactive session.

use veil_core::Segment;

use super::context::UiContext;
use super::theme::{colors, sensitive_delimiters, styled, Badge};

/// One status line: colored badge label plus message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let label = styled(kind.label(ctx.unicode), kind.color(), ctx.color);
    if message.is_empty() {
        label
    } else {
        format!("{} {}", label, message)
    }
}

/// A labelled value: `Label: value` in pretty mode, `label=value` for
/// pipes and logs.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), colors::DIM, ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// An advisory line, dimmed where possible.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", colors::DIM, ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Renders preview segments with sensitive runs marked.
///
/// Reverse video does the marking when color is on; otherwise runs are
/// wrapped in delimiters so the result survives pipes and logs.
pub fn highlight(ctx: &UiContext, segments: &[Segment]) -> String {
    let (open, close) = sensitive_delimiters(ctx.unicode);
    let mut out = String::new();
    for segment in segments {
        if !segment.sensitive {
            out.push_str(&segment.text);
        } else if ctx.color {
            out.push_str(&styled(&segment.text, colors::REVERSE, true));
        } else {
            out.push_str(open);
            out.push_str(&segment.text);
            out.push_str(close);
        }
    }
    out
}

/// Blank spacer line, pretty mode only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// An error plus its optional hint as one printable block.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

/// Prints an error block to stderr.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
