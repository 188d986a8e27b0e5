//! The redaction facade.
//!
//! [`Redactor`] bundles a tokenizer and the secondary tagger registry
//! behind one object so callers hold a single handle for the whole
//! pipeline. Policy and key stay outside: they are session state owned
//! by the caller, passed into each operation, which keeps a single
//! redactor reusable across policy edits without rebuild.

use crate::classify;
use crate::crypto::SessionKey;
use crate::decode;
use crate::encode;
use crate::error::Result;
use crate::policy::Policy;
use crate::preview::{self, Segment};
use crate::tagger::{TaggerRegistry, WordTagger};
use crate::token::{Token, Tokenizer};
use crate::tokenize::LexicalTokenizer;

/// Tokenizer plus secondary taggers, ready to encode.
pub struct Redactor {
    tokenizer: Box<dyn Tokenizer>,
    registry: TaggerRegistry,
}

impl Redactor {
    /// A redactor with the built-in lexical tokenizer and no secondary
    /// taggers.
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(LexicalTokenizer::new()))
    }

    /// A redactor over a caller-supplied tokenizer.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            registry: TaggerRegistry::new(),
        }
    }

    /// Registers a secondary word tagger under a language label.
    ///
    /// Taggers are consulted in registration order during
    /// classification.
    pub fn register_tagger(&mut self, language: impl Into<String>, tagger: Box<dyn WordTagger>) {
        self.registry.register(language, tagger);
    }

    /// The registered secondary taggers.
    pub fn registry(&self) -> &TaggerRegistry {
        &self.registry
    }

    /// Tokenizes text with this redactor's tokenizer.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    /// Would this token be sealed under the given policy?
    pub fn is_sensitive(&self, token: &Token, policy: &Policy) -> bool {
        classify::is_sensitive(token, policy, &self.registry)
    }

    /// Encrypts every sensitive token; see [`encode::encode`].
    pub fn encode(&self, text: &str, policy: &Policy, key: &SessionKey) -> Result<String> {
        encode::encode(text, self.tokenizer.as_ref(), &self.registry, policy, key)
    }

    /// Reverses recoverable spans; see [`decode::decode`].
    ///
    /// Provided on the facade for symmetry. Decoding is lexical and
    /// ignores the tokenizer entirely, so the free function behaves
    /// identically.
    pub fn decode(&self, text: &str, key: &SessionKey) -> String {
        decode::decode(text, key)
    }

    /// Splits text into sensitivity-flagged segments; see
    /// [`preview::preview`].
    pub fn preview(&self, text: &str, policy: &Policy) -> Vec<Segment> {
        preview::preview(text, self.tokenizer.as_ref(), &self.registry, policy)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}
