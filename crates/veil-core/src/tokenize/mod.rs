//! Built-in lexical tokenizer.
//!
//! [`LexicalTokenizer`] is the default [`Tokenizer`]: regex patterns
//! claim structure-bearing spans first (URLs, emails, phones, dates,
//! numbers), then a scanner fills the gaps with Unicode word runs, and
//! whatever remains becomes trivia attached to the neighboring tokens.
//! Word tokens are looked up in an optional [`Gazetteer`] for name-like
//! tags (Person, Place, Organization, Demonym).
//!
//! The tokenizer upholds the reconstruction invariant: tokens plus their
//! trivia always reassemble into the input byte for byte. There is no
//! linguistic analysis here; shape and word lists are the whole story.

pub mod patterns;

use std::collections::BTreeSet;

use crate::gazetteer::Gazetteer;
use crate::token::{Token, Tokenizer};

/// Pattern-first, word-fill tokenizer over plain text.
#[derive(Debug, Clone, Default)]
pub struct LexicalTokenizer {
    gazetteer: Gazetteer,
}

impl LexicalTokenizer {
    /// Creates a tokenizer with no gazetteer; only pattern tags are
    /// assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer that tags word tokens from the given
    /// gazetteer.
    pub fn with_gazetteer(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// The gazetteer used for word tagging.
    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }
}

impl Tokenizer for LexicalTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }

        // Pattern spans first, then word runs in the gaps between them.
        let pattern_spans = patterns::scan(text);
        let mut spans: Vec<(usize, usize, Option<&'static str>)> = Vec::new();
        let mut cursor = 0;
        for ps in &pattern_spans {
            push_word_spans(text, cursor, ps.start, &mut spans);
            spans.push((ps.start, ps.end, Some(ps.tag)));
            cursor = ps.end;
        }
        push_word_spans(text, cursor, text.len(), &mut spans);

        // No token material at all: carry the text on a single empty
        // token so reconstruction still holds.
        if spans.is_empty() {
            return vec![Token::new("").with_leading(text)];
        }

        let mut tokens = Vec::with_capacity(spans.len());
        for (i, &(start, end, tag)) in spans.iter().enumerate() {
            let word = &text[start..end];
            let tags = match tag {
                Some(tag) => BTreeSet::from([tag.to_string()]),
                None => self.gazetteer.lookup(word),
            };
            let next_start = spans.get(i + 1).map_or(text.len(), |s| s.0);

            tokens.push(Token {
                text: word.to_string(),
                leading_trivia: if i == 0 {
                    text[..start].to_string()
                } else {
                    String::new()
                },
                trailing_trivia: text[end..next_start].to_string(),
                tags,
            });
        }
        tokens
    }
}

/// Appends word spans found between `from` and `to` (byte offsets).
///
/// A word is a run of Unicode alphanumerics or underscores; an
/// apostrophe stays inside the word when flanked by alphanumerics on
/// both sides ("don't", "Alice's"), so contractions survive as single
/// tokens.
fn push_word_spans(
    text: &str,
    from: usize,
    to: usize,
    out: &mut Vec<(usize, usize, Option<&'static str>)>,
) {
    let slice = &text[from..to];
    let chars: Vec<(usize, char)> = slice.char_indices().collect();

    let mut i = 0;
    while i < chars.len() {
        if !is_word_char(chars[i].1) {
            i += 1;
            continue;
        }
        let start = chars[i].0;
        let mut j = i + 1;
        while j < chars.len() {
            let c = chars[j].1;
            if is_word_char(c) {
                j += 1;
                continue;
            }
            if is_apostrophe(c) && j + 1 < chars.len() && is_word_char(chars[j + 1].1) {
                j += 1;
                continue;
            }
            break;
        }
        let end = chars.get(j).map_or(slice.len(), |&(offset, _)| offset);
        out.push((from + start, from + end, None));
        i = j;
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::reconstruct;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_reconstruction_on_mixed_text() {
        let tokenizer = LexicalTokenizer::new();
        let text = "  Mail bob@example.com by 3/15/2024 -- thanks!\n";
        let tokens = tokenizer.tokenize(text);

        assert_eq!(reconstruct(&tokens), text);
    }

    #[test]
    fn test_words_and_pattern_tokens() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("Mail bob@example.com today");

        assert_eq!(texts(&tokens), ["Mail", "bob@example.com", "today"]);
        assert!(tokens[1].has_tag("Email"));
        assert!(tokens[0].tags.is_empty());
    }

    #[test]
    fn test_leading_trivia_on_first_token_only() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("  one two");

        assert_eq!(tokens[0].leading_trivia, "  ");
        assert_eq!(tokens[0].trailing_trivia, " ");
        assert_eq!(tokens[1].leading_trivia, "");
    }

    #[test]
    fn test_trailing_trivia_reaches_end_of_text() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("word...\n\n");

        assert_eq!(tokens.last().unwrap().trailing_trivia, "...\n\n");
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        let tokenizer = LexicalTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_pure_trivia_carried_by_empty_token() {
        let tokenizer = LexicalTokenizer::new();
        let text = " \t\n--- ";
        let tokens = tokenizer.tokenize(text);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "");
        assert_eq!(reconstruct(&tokens), text);
    }

    #[test]
    fn test_contractions_stay_whole() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("don't touch Alice's book");

        assert_eq!(texts(&tokens), ["don't", "touch", "Alice's", "book"]);
    }

    #[test]
    fn test_trailing_apostrophe_is_trivia() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("the dogs' bowls");

        assert_eq!(texts(&tokens), ["the", "dogs", "bowls"]);
        assert_eq!(reconstruct(&tokens), "the dogs' bowls");
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("héllo wörld日本");

        assert_eq!(texts(&tokens), ["héllo", "wörld日本"]);
    }

    #[test]
    fn test_gazetteer_tags_word_tokens() {
        let gazetteer = Gazetteer::from_entries([("Person", vec!["alice"]), ("Place", vec!["paris"])]);
        let tokenizer = LexicalTokenizer::with_gazetteer(gazetteer);
        let tokens = tokenizer.tokenize("Alice went to Paris");

        assert!(tokens[0].has_tag("Person"));
        assert!(tokens[3].has_tag("Place"));
        assert!(tokens[1].tags.is_empty());
    }

    #[test]
    fn test_marker_text_shatters_into_words() {
        // "[ENC]" can never survive as token text, so encoded output
        // is unambiguous to the decoder.
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("raw [ENC]abc marker");

        assert_eq!(texts(&tokens), ["raw", "ENC", "abc", "marker"]);
        assert_eq!(reconstruct(&tokens), "raw [ENC]abc marker");
    }

    #[test]
    fn test_underscored_identifiers_stay_whole() {
        let tokenizer = LexicalTokenizer::new();
        let tokens = tokenizer.tokenize("see user_name_7 there");

        assert_eq!(texts(&tokens), ["see", "user_name_7", "there"]);
    }
}
