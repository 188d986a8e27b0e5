use proptest::prelude::*;

use veil_core::{decode, reconstruct, LexicalTokenizer, Policy, Redactor, SessionKey, Tokenizer, MARKER};

proptest! {
    #[test]
    fn tokenize_reconstructs_printable_text(text in "\\PC{0,200}") {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize(&text);
        prop_assert_eq!(reconstruct(&tokens), text);
    }

    #[test]
    fn tokenize_reconstructs_arbitrary_text(text in any::<String>()) {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize(&text);
        prop_assert_eq!(reconstruct(&tokens), text);
    }

    #[test]
    fn leading_trivia_only_on_first_token(text in "\\PC{0,200}") {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize(&text);
        for token in tokens.iter().skip(1) {
            prop_assert!(token.leading_trivia.is_empty());
        }
    }
}

proptest! {
    #[test]
    fn encode_with_nothing_enabled_is_identity(text in "\\PC{0,200}") {
        let redactor = Redactor::new();
        let policy = Policy::none();
        let key = SessionKey::generate().unwrap();

        let encoded = redactor.encode(&text, &policy, &key).unwrap();
        prop_assert_eq!(encoded, text);
    }
}

proptest! {
    #[test]
    fn encode_decode_round_trip_on_word_documents(
        words in prop::collection::vec(("[a-z]{2,8}", any::<bool>()), 1..12)
    ) {
        let redactor = Redactor::new();
        let key = SessionKey::generate().unwrap();

        let mut policy = Policy::none();
        for (word, sensitive) in &words {
            if *sensitive {
                policy.add_custom_word(word);
            }
        }

        let text = words
            .iter()
            .map(|(word, _)| word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            + ".";

        let encoded = redactor.encode(&text, &policy, &key).unwrap();
        if words.iter().any(|(_, sensitive)| *sensitive) {
            prop_assert!(encoded.contains(MARKER));
        } else {
            prop_assert_eq!(&encoded, &text);
        }
        prop_assert_eq!(decode(&encoded, &key), text);
    }
}

proptest! {
    #[test]
    fn decode_without_marker_is_identity(text in "\\PC{0,200}") {
        prop_assume!(!text.contains(MARKER));
        let key = SessionKey::generate().unwrap();
        prop_assert_eq!(decode(&text, &key), text);
    }

    #[test]
    fn decode_never_panics_on_arbitrary_text(text in any::<String>()) {
        let key = SessionKey::generate().unwrap();
        let _ = decode(&text, &key);
    }
}

proptest! {
    #[test]
    fn preview_segments_rejoin(text in "\\PC{0,200}") {
        let redactor = Redactor::new();
        let policy = Policy::new();

        let rejoined: String = redactor
            .preview(&text, &policy)
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        prop_assert_eq!(rejoined, text);
    }
}
