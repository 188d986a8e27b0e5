//! Token sensitivity classification.
//!
//! One question, answered in a fixed order: does this token need to be
//! encrypted under the current policy? The custom dictionary is checked
//! first, then the tags the tokenizer already assigned, then each
//! registered secondary tagger. The first hit wins; later taggers are
//! never consulted once a verdict exists.

use crate::policy::{normalize_word, Policy};
use crate::tagger::TaggerRegistry;
use crate::token::Token;

/// Decides whether a token must be redacted.
///
/// Classification is pure: no state changes, same answer for the same
/// inputs. A token whose text normalizes to empty (trivia carriers) is
/// never sensitive.
pub fn is_sensitive(token: &Token, policy: &Policy, registry: &TaggerRegistry) -> bool {
    let word = normalize_word(&token.text);
    if word.is_empty() {
        return false;
    }

    // 1. Custom dictionary, exact normalized match
    if policy.contains_word(&word) {
        return true;
    }

    // 2. Tags assigned by the tokenizer
    if token.tags.iter().any(|tag| policy.is_enabled(tag)) {
        return true;
    }

    // 3. Secondary taggers, in registration order, first hit wins
    for (_, tagger) in registry.iter() {
        if tagger
            .tag_word(&token.text)
            .iter()
            .any(|tag| policy.is_enabled(tag))
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::Gazetteer;

    fn registry_with(entries: Vec<(&'static str, Gazetteer)>) -> TaggerRegistry {
        let mut registry = TaggerRegistry::new();
        for (language, gazetteer) in entries {
            registry.register(language, Box::new(gazetteer));
        }
        registry
    }

    #[test]
    fn test_custom_word_beats_everything() {
        let mut policy = Policy::none();
        policy.add_custom_word("Falcon");
        let registry = TaggerRegistry::new();

        let token = Token::new("FALCON");
        assert!(is_sensitive(&token, &policy, &registry));
    }

    #[test]
    fn test_custom_word_ignores_surrounding_whitespace() {
        let mut policy = Policy::none();
        policy.add_custom_word("falcon");
        let registry = TaggerRegistry::new();

        // Token text is never trivia-padded in practice, but the
        // classifier normalizes anyway
        let token = Token::new(" falcon ");
        assert!(is_sensitive(&token, &policy, &registry));
    }

    #[test]
    fn test_enabled_tag_matches() {
        let policy = Policy::new();
        let registry = TaggerRegistry::new();

        let token = Token::new("bob@example.com").with_tag("Email");
        assert!(is_sensitive(&token, &policy, &registry));
    }

    #[test]
    fn test_disabled_tag_does_not_match() {
        let mut policy = Policy::new();
        policy.disable_category("Email");
        let registry = TaggerRegistry::new();

        let token = Token::new("bob@example.com").with_tag("Email");
        assert!(!is_sensitive(&token, &policy, &registry));
    }

    #[test]
    fn test_secondary_tagger_consulted_after_primary() {
        let mut policy = Policy::none();
        policy.enable_category("Place");
        let registry = registry_with(vec![(
            "fr",
            Gazetteer::from_entries([("Place", vec!["rue"])]),
        )]);

        let token = Token::new("Rue");
        assert!(is_sensitive(&token, &policy, &registry));
    }

    #[test]
    fn test_secondary_tag_outside_policy_is_ignored() {
        let mut policy = Policy::none();
        policy.enable_category("Person");
        let registry = registry_with(vec![(
            "fr",
            Gazetteer::from_entries([("Place", vec!["rue"])]),
        )]);

        let token = Token::new("rue");
        assert!(!is_sensitive(&token, &policy, &registry));
    }

    #[test]
    fn test_empty_and_trivia_tokens_never_sensitive() {
        let mut policy = Policy::new();
        policy.add_custom_word("anything");
        let registry = TaggerRegistry::new();

        assert!(!is_sensitive(&Token::new(""), &policy, &registry));
        assert!(!is_sensitive(
            &Token::new("").with_leading(" \n"),
            &policy,
            &registry
        ));
    }

    #[test]
    fn test_untagged_unknown_word_is_not_sensitive() {
        let policy = Policy::new();
        let registry = TaggerRegistry::new();

        assert!(!is_sensitive(&Token::new("plain"), &policy, &registry));
    }
}
