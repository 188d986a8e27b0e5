//! Redaction policy: which categories and words are sensitive.
//!
//! A [`Policy`] is plain session state. It never touches key material and
//! is cheap to clone, serialize into a status snapshot, or rebuild from
//! CLI flags. The classifier consults it on every token; mutating it
//! takes effect on the next encode pass.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Category tags the built-in tokenizer and taggers can produce.
///
/// Secondary taggers may emit tags outside this list; the policy treats
/// those as an open vocabulary and toggles them by exact name.
pub const KNOWN_CATEGORIES: [&str; 11] = [
    "AtMention",
    "Date",
    "Demonym",
    "Email",
    "HashTag",
    "Organization",
    "Person",
    "PhoneNumber",
    "Place",
    "Url",
    "Value",
];

/// Resolves a category name case-insensitively against the known list.
///
/// Returns the canonical spelling for known categories, `None` otherwise.
pub fn resolve_category(name: &str) -> Option<&'static str> {
    KNOWN_CATEGORIES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// Session-scoped redaction policy.
///
/// Tracks the set of enabled category tags and the ordered custom word
/// dictionary. Defaults to every known category enabled and no custom
/// words, matching a fresh session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Category tags currently marked sensitive
    enabled: BTreeSet<String>,

    /// User-added words, normalized, in insertion order
    custom_words: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            enabled: KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            custom_words: Vec::new(),
        }
    }
}

impl Policy {
    /// Creates a policy with all known categories enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy with no categories enabled and no custom words.
    pub fn none() -> Self {
        Self {
            enabled: BTreeSet::new(),
            custom_words: Vec::new(),
        }
    }

    /// Returns true if the given tag is currently sensitive.
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.enabled.contains(tag)
    }

    /// The enabled category tags, in sorted order.
    pub fn enabled_categories(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }

    /// The custom word dictionary, in insertion order.
    pub fn custom_words(&self) -> &[String] {
        &self.custom_words
    }

    /// Returns true if the normalized word is in the custom dictionary.
    ///
    /// The caller is expected to pass an already-normalized key
    /// (trimmed, lowercased); dictionary entries are stored that way.
    pub fn contains_word(&self, normalized: &str) -> bool {
        self.custom_words.iter().any(|w| w == normalized)
    }

    /// Flips a category between sensitive and ignored.
    ///
    /// Known category names resolve case-insensitively to their canonical
    /// spelling; unknown names (from secondary taggers) toggle verbatim.
    /// Returns the new state: `true` if the category is now enabled.
    pub fn toggle_category(&mut self, name: &str) -> bool {
        let canonical = self.canonical_tag(name);
        if self.enabled.remove(&canonical) {
            false
        } else {
            self.enabled.insert(canonical);
            true
        }
    }

    /// Marks a category sensitive. Returns true if it was not already.
    pub fn enable_category(&mut self, name: &str) -> bool {
        let canonical = self.canonical_tag(name);
        self.enabled.insert(canonical)
    }

    /// Marks a category ignored. Returns true if it was enabled before.
    pub fn disable_category(&mut self, name: &str) -> bool {
        let canonical = self.canonical_tag(name);
        self.enabled.remove(&canonical)
    }

    /// Adds a word to the custom dictionary.
    ///
    /// The word is trimmed and lowercased before insertion. Returns
    /// `false` without modifying the dictionary when the normalized word
    /// is empty or already present; order of existing entries is never
    /// disturbed.
    pub fn add_custom_word(&mut self, raw: &str) -> bool {
        let word = normalize_word(raw);
        if word.is_empty() || self.contains_word(&word) {
            return false;
        }
        self.custom_words.push(word);
        true
    }

    /// Removes a word from the custom dictionary.
    ///
    /// Matching is by normalized form. Returns `true` if an entry was
    /// removed.
    pub fn remove_custom_word(&mut self, raw: &str) -> bool {
        let word = normalize_word(raw);
        let before = self.custom_words.len();
        self.custom_words.retain(|w| w != &word);
        self.custom_words.len() != before
    }

    /// Empties the custom dictionary. Enabled categories are untouched.
    pub fn clear_custom_words(&mut self) {
        self.custom_words.clear();
    }

    fn canonical_tag(&self, name: &str) -> String {
        match resolve_category(name) {
            Some(known) => known.to_string(),
            None => name.trim().to_string(),
        }
    }
}

/// Normalizes a word the way the classifier and dictionary both do:
/// trimmed and lowercased (Unicode-aware).
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all_known_categories() {
        let policy = Policy::new();
        for category in KNOWN_CATEGORIES {
            assert!(policy.is_enabled(category), "{category} should start enabled");
        }
        assert!(policy.custom_words().is_empty());
    }

    #[test]
    fn test_toggle_category_round_trip() {
        let mut policy = Policy::new();

        assert!(!policy.toggle_category("Email"));
        assert!(!policy.is_enabled("Email"));

        assert!(policy.toggle_category("Email"));
        assert!(policy.is_enabled("Email"));
    }

    #[test]
    fn test_toggle_resolves_case_insensitively() {
        let mut policy = Policy::new();

        assert!(!policy.toggle_category("email"));
        assert!(!policy.is_enabled("Email"));

        assert!(policy.toggle_category("EMAIL"));
        assert!(policy.is_enabled("Email"));
    }

    #[test]
    fn test_toggle_unknown_tag_verbatim() {
        let mut policy = Policy::none();

        assert!(policy.toggle_category("MedicalTerm"));
        assert!(policy.is_enabled("MedicalTerm"));
        assert!(!policy.is_enabled("medicalterm"));
    }

    #[test]
    fn test_add_custom_word_normalizes() {
        let mut policy = Policy::new();

        assert!(policy.add_custom_word("  Falcon  "));
        assert_eq!(policy.custom_words(), ["falcon"]);
        assert!(policy.contains_word("falcon"));
    }

    #[test]
    fn test_add_custom_word_rejects_duplicates_and_empty() {
        let mut policy = Policy::new();

        assert!(policy.add_custom_word("falcon"));
        assert!(!policy.add_custom_word("FALCON"));
        assert!(!policy.add_custom_word("   "));
        assert_eq!(policy.custom_words().len(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut policy = Policy::new();
        policy.add_custom_word("zulu");
        policy.add_custom_word("alpha");
        policy.add_custom_word("mike");

        assert_eq!(policy.custom_words(), ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_remove_custom_word() {
        let mut policy = Policy::new();
        policy.add_custom_word("falcon");
        policy.add_custom_word("osprey");

        assert!(policy.remove_custom_word(" Falcon "));
        assert!(!policy.remove_custom_word("falcon"));
        assert_eq!(policy.custom_words(), ["osprey"]);
    }

    #[test]
    fn test_clear_custom_words_keeps_categories() {
        let mut policy = Policy::new();
        policy.add_custom_word("falcon");
        policy.toggle_category("Email");

        policy.clear_custom_words();

        assert!(policy.custom_words().is_empty());
        assert!(!policy.is_enabled("Email"));
        assert!(policy.is_enabled("Person"));
    }

    #[test]
    fn test_resolve_category() {
        assert_eq!(resolve_category("phonenumber"), Some("PhoneNumber"));
        assert_eq!(resolve_category(" URL "), Some("Url"));
        assert_eq!(resolve_category("nonsense"), None);
    }

    #[test]
    fn test_policy_serializes_to_snapshot() {
        let mut policy = Policy::none();
        policy.enable_category("Email");
        policy.add_custom_word("falcon");

        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["enabled"], serde_json::json!(["Email"]));
        assert_eq!(json["custom_words"], serde_json::json!(["falcon"]));
    }
}
