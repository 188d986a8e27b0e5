//! Secondary word taggers.
//!
//! The built-in tokenizer classifies English-looking structure (emails,
//! URLs, numbers, gazetteer words). Anything beyond that is supplied by
//! [`WordTagger`] implementations registered per language in a
//! [`TaggerRegistry`]: the classifier consults them word by word, in
//! registration order, after the primary tags have had their chance.

use std::collections::BTreeSet;
use std::fmt;

/// A per-word category tagger for one language or domain.
///
/// Implementations receive the raw token text (not normalized) and
/// return the set of category tags they recognize for it. An empty set
/// means the tagger has no opinion; the classifier then moves on to the
/// next registered tagger.
pub trait WordTagger: Send + Sync {
    /// Tags a single word. Must not panic on arbitrary input.
    fn tag_word(&self, word: &str) -> BTreeSet<String>;
}

/// Ordered collection of secondary taggers keyed by language label.
///
/// Registration order is consultation order, and the first tagger whose
/// tags intersect the enabled categories decides the verdict. Labels are
/// informational ("fr", "de", "medical"); they show up in status output
/// but play no part in matching.
#[derive(Default)]
pub struct TaggerRegistry {
    taggers: Vec<(String, Box<dyn WordTagger>)>,
}

impl TaggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tagger under the given language label.
    ///
    /// Registering the same label twice keeps both taggers; they are
    /// consulted in the order they were added.
    pub fn register(&mut self, language: impl Into<String>, tagger: Box<dyn WordTagger>) {
        self.taggers.push((language.into(), tagger));
    }

    /// Iterates taggers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn WordTagger)> {
        self.taggers
            .iter()
            .map(|(language, tagger)| (language.as_str(), tagger.as_ref()))
    }

    /// The registered language labels, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.taggers.iter().map(|(language, _)| language.as_str())
    }

    pub fn len(&self) -> usize {
        self.taggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taggers.is_empty()
    }
}

impl fmt::Debug for TaggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggerRegistry")
            .field("languages", &self.languages().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTagger(&'static str);

    impl WordTagger for FixedTagger {
        fn tag_word(&self, word: &str) -> BTreeSet<String> {
            if word.eq_ignore_ascii_case("rue") {
                BTreeSet::from([self.0.to_string()])
            } else {
                BTreeSet::new()
            }
        }
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = TaggerRegistry::new();
        registry.register("fr", Box::new(FixedTagger("Place")));
        registry.register("de", Box::new(FixedTagger("Organization")));

        let languages: Vec<_> = registry.languages().collect();
        assert_eq!(languages, ["fr", "de"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_iter_yields_taggers() {
        let mut registry = TaggerRegistry::new();
        registry.register("fr", Box::new(FixedTagger("Place")));

        let (language, tagger) = registry.iter().next().unwrap();
        assert_eq!(language, "fr");
        assert!(tagger.tag_word("rue").contains("Place"));
        assert!(tagger.tag_word("street").is_empty());
    }

    #[test]
    fn test_debug_lists_languages_only() {
        let mut registry = TaggerRegistry::new();
        registry.register("fr", Box::new(FixedTagger("Place")));

        let rendered = format!("{:?}", registry);
        assert!(rendered.contains("fr"));
    }
}
