//! # Veil Core
//!
//! Core library for Veil - session-scoped, reversible redaction of
//! sensitive text.
//!
//! This crate provides the classification, encoding, and decoding
//! pipeline independent of the CLI interface. Sensitive tokens are
//! replaced in place by `[ENC]` plus an AES-256-GCM payload under a
//! key that lives only as long as the process; everything else in the
//! text, down to the whitespace, passes through untouched.
//!
//! ## Architecture
//!
//! - **token**: Token model, reconstruction invariant, `Tokenizer` seam
//! - **tokenize**: Built-in lexical tokenizer (patterns + word runs)
//! - **policy**: Enabled categories and the custom word dictionary
//! - **tagger**: Secondary per-language word taggers
//! - **gazetteer**: Word lists mapping terms to category tags
//! - **classify**: The sensitivity verdict, in fixed precedence order
//! - **crypto**: Session key and per-token sealing
//! - **encode** / **decode** / **preview**: The three text operations
//! - **redactor**: Facade bundling tokenizer and taggers
//!
//! ## Lifecycle
//!
//! Encoded output is only recoverable by the process that produced it:
//! the session key is generated from OS randomness, never serialized,
//! and zeroized on drop. Losing the process is the point.

pub mod classify;
pub mod crypto;
pub mod decode;
pub mod encode;
pub mod error;
pub mod gazetteer;
pub mod policy;
pub mod preview;
pub mod redactor;
pub mod tagger;
pub mod token;
pub mod tokenize;

pub use crypto::{Recovered, SessionKey};
pub use decode::{decode, MARKER};
pub use error::{Result, VeilError};
pub use gazetteer::Gazetteer;
pub use policy::{resolve_category, Policy, KNOWN_CATEGORIES};
pub use preview::Segment;
pub use redactor::Redactor;
pub use tagger::{TaggerRegistry, WordTagger};
pub use token::{reconstruct, Token, Tokenizer};
pub use tokenize::LexicalTokenizer;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
