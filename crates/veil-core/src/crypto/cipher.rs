//! Per-token authenticated encryption.
//!
//! Each sensitive token is sealed independently under the session key:
//! a fresh 96-bit nonce is drawn from the OS, the token text is encrypted
//! with AES-256-GCM, and `nonce || ciphertext || tag` is base64-encoded
//! into the characters `[A-Za-z0-9+/=]`. That alphabet is what lets the
//! decoder find spans lexically without any framing beyond the marker.
//!
//! Opening is deliberately infallible in the type system: anything that
//! is not a well-formed, authentic ciphertext under this key comes back
//! as [`Recovered::Unreadable`], and the caller leaves the span alone.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::crypto::key::SessionKey;
use crate::error::{Result, VeilError};

/// Length of the per-token nonce in bytes (96 bits, the GCM standard).
const NONCE_LENGTH: usize = 12;

/// Length of the GCM authentication tag in bytes.
const TAG_LENGTH: usize = 16;

/// Outcome of attempting to open one encoded span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovered {
    /// The span authenticated under the session key; here is its text.
    Plaintext(String),

    /// Corrupted, truncated, foreign-key, or otherwise unreadable.
    /// The caller must leave the original span unchanged.
    Unreadable,
}

impl Recovered {
    /// Returns the recovered text, if any.
    pub fn into_plaintext(self) -> Option<String> {
        match self {
            Recovered::Plaintext(text) => Some(text),
            Recovered::Unreadable => None,
        }
    }
}

/// Encrypts one token's text under the session key.
///
/// Returns the base64 payload only, without the `[ENC]` marker; the
/// encoder prepends that. Every call draws a fresh nonce, so sealing the
/// same word twice yields different payloads.
///
/// # Errors
///
/// Returns [`VeilError::Crypto`] if nonce generation or encryption
/// fails. Callers must treat that as fatal for the whole encode pass; a
/// failed seal must never fall back to emitting plaintext.
///
/// # Security
///
/// An empty token seals fine but decodes as [`Recovered::Unreadable`]
/// (an empty recovery is indistinguishable from a failed one), so callers
/// should not seal empty text.
pub fn seal_token(plaintext: &str, key: &SessionKey) -> Result<String> {
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce_bytes)
        .map_err(|e| VeilError::Crypto(format!("Failed to generate nonce: {}", e)))?;

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
        .map_err(|e| VeilError::Crypto(format!("Failed to seal token: {}", e)))?;

    let mut payload = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
    payload.extend_from_slice(&nonce_bytes);
    payload.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(payload))
}

/// Attempts to decrypt one base64 payload under the session key.
///
/// This function is total: malformed base64, short payloads, tampered
/// ciphertext, wrong-key ciphertext, invalid UTF-8, and empty recovered
/// text all yield [`Recovered::Unreadable`] rather than an error. The
/// GCM tag makes the success path trustworthy; there is no way to
/// "partially" recover a span.
pub fn open_token(payload: &str, key: &SessionKey) -> Recovered {
    let bytes = match BASE64.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => return Recovered::Unreadable,
    };

    if bytes.len() < NONCE_LENGTH + TAG_LENGTH {
        return Recovered::Unreadable;
    }

    let (nonce_bytes, ciphertext) = bytes.split_at(NONCE_LENGTH);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let plaintext = match cipher.decrypt(Nonce::from_slice(nonce_bytes), ciphertext) {
        Ok(plaintext) => plaintext,
        Err(_) => return Recovered::Unreadable,
    };

    match String::from_utf8(plaintext) {
        Ok(text) if !text.is_empty() => Recovered::Plaintext(text),
        _ => Recovered::Unreadable,
    }
}
