//! Lexical span decoding.
//!
//! The decoder knows nothing about tokenization. It scans for the span
//! grammar `[ENC]` followed by a maximal run of base64 characters
//! (`[A-Za-z0-9+/=]`) and tries to open each run under the session key.
//! Spans that authenticate are replaced by their plaintext; everything
//! else, including corrupted or foreign spans, is left byte for byte
//! unchanged. Decoding is total: it never fails, it only declines.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::crypto::{open_token, Recovered, SessionKey};

/// Marker prefix for an encoded span.
///
/// The built-in tokenizer can never produce this sequence as token text
/// (brackets are always trivia), so markers in encoded output are
/// unambiguous.
pub const MARKER: &str = "[ENC]";

/// One encoded span: marker plus a maximal base64 run.
static SPAN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[ENC\]([A-Za-z0-9+/=]+)").ok());

/// Replaces every recoverable encoded span in `text` with its plaintext.
///
/// Spans whose payload does not decode cleanly under `key` (tampered,
/// truncated, encoded by another session) stay exactly as they were,
/// marker included. Text without spans passes through untouched, so
/// decoding arbitrary input is always safe.
pub fn decode(text: &str, key: &SessionKey) -> String {
    if text.is_empty() {
        return String::new();
    }
    let Some(re) = SPAN_PATTERN.as_ref() else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &Captures<'_>| {
        match open_token(&caps[1], key) {
            Recovered::Plaintext(word) => word,
            Recovered::Unreadable => caps[0].to_string(),
        }
    })
    .into_owned()
}
