//! Core token model for the redaction pipeline.
//!
//! A [`Token`] is a span of meaningful text plus the inert characters
//! (trivia) that surround it. Tokens are the unit of classification and
//! encryption: the encoder walks them in order, and concatenating
//! `leading_trivia + text + trailing_trivia` for every token reproduces
//! the source text byte for byte. That invariant is what makes redaction
//! lossless for everything the classifier leaves alone.

use std::collections::BTreeSet;

/// A classified span of source text with its surrounding trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The meaningful text of the token (never includes trivia)
    pub text: String,

    /// Characters before the token that belong to no other token
    /// (only the first token of a document carries a non-empty prefix)
    pub leading_trivia: String,

    /// Characters between this token's text and the next token
    pub trailing_trivia: String,

    /// Category tags assigned by the tokenizer (e.g. "Email", "Person")
    pub tags: BTreeSet<String>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            leading_trivia: String::new(),
            trailing_trivia: String::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_leading(mut self, trivia: impl Into<String>) -> Self {
        self.leading_trivia = trivia.into();
        self
    }

    pub fn with_trailing(mut self, trivia: impl Into<String>) -> Self {
        self.trailing_trivia = trivia.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Returns true if this token carries the given category tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The exact source characters this token accounts for.
    pub fn surface(&self) -> String {
        let mut out = String::with_capacity(
            self.leading_trivia.len() + self.text.len() + self.trailing_trivia.len(),
        );
        out.push_str(&self.leading_trivia);
        out.push_str(&self.text);
        out.push_str(&self.trailing_trivia);
        out
    }
}

/// Rebuilds the source text from a token stream.
///
/// For any tokenizer honoring the reconstruction invariant,
/// `reconstruct(&tokenizer.tokenize(text)) == text`.
pub fn reconstruct(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.leading_trivia);
        out.push_str(&token.text);
        out.push_str(&token.trailing_trivia);
    }
    out
}

/// Strategy for splitting source text into tokens.
///
/// Implementations must uphold two invariants:
///
/// - **Reconstruction**: concatenating every token's
///   `leading_trivia + text + trailing_trivia` yields the input exactly.
/// - **Trivia purity**: `text` never contains characters the
///   implementation treats as trivia, so encrypting a token never
///   swallows the whitespace or punctuation around it.
pub trait Tokenizer: Send + Sync {
    /// Splits `text` into an ordered token stream covering every byte.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}
