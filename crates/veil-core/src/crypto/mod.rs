//! Cryptographic operations for Veil.
//!
//! This module provides per-token encryption using well-audited libraries:
//! - **AES-256-GCM**: Authenticated encryption (RustCrypto `aes-gcm`)
//! - **OS CSPRNG**: Key and nonce generation via `getrandom`
//!
//! ## Security Model
//!
//! - One random 256-bit key per process, held only in memory
//! - Each sealed token gets a fresh random 96-bit nonce
//! - The GCM tag authenticates every span; tampering is detected, not
//!   silently decrypted
//! - Key material zeroized from memory on drop
//!
//! ## Threat Model
//!
//! We defend against:
//! - Shoulder-surfing and casual exposure of redacted text
//! - Recovery of redacted tokens after the process exits
//!
//! We do NOT defend against:
//! - Compromised OS / memory access while the session is live
//! - Traffic analysis of span lengths

pub mod cipher;
pub mod key;

pub use cipher::{open_token, seal_token, Recovered};
pub use key::SessionKey;
