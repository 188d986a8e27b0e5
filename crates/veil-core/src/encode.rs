//! The encode pass: classify and seal, trivia untouched.
//!
//! Encoding walks the token stream in order and emits exactly one of two
//! things per token: the original text, or `[ENC]` plus the sealed
//! payload. Trivia is copied through verbatim on both paths, which is
//! how the output keeps the source's exact spacing, punctuation, and
//! line structure.

use crate::classify::is_sensitive;
use crate::crypto::{seal_token, SessionKey};
use crate::decode::MARKER;
use crate::error::Result;
use crate::policy::Policy;
use crate::tagger::TaggerRegistry;
use crate::token::Tokenizer;

/// Encrypts every sensitive token in `text` under the session key.
///
/// Non-sensitive tokens and all trivia pass through byte for byte.
/// Empty input encodes to empty output without touching the tokenizer.
///
/// # Errors
///
/// Returns [`crate::VeilError::Crypto`] if sealing any token fails. The
/// whole pass fails in that case; partial output that silently contains
/// a plaintext sensitive token is never produced.
pub fn encode(
    text: &str,
    tokenizer: &dyn Tokenizer,
    registry: &TaggerRegistry,
    policy: &Policy,
    key: &SessionKey,
) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let tokens = tokenizer.tokenize(text);
    let mut out = String::with_capacity(text.len() * 2);

    for token in &tokens {
        out.push_str(&token.leading_trivia);
        if is_sensitive(token, policy, registry) {
            out.push_str(MARKER);
            out.push_str(&seal_token(&token.text, key)?);
        } else {
            out.push_str(&token.text);
        }
        out.push_str(&token.trailing_trivia);
    }

    Ok(out)
}
