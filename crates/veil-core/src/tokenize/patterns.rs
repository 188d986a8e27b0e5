//! Structure-bearing token patterns.
//!
//! These regexes find tokens whose shape alone implies a category:
//! URLs, emails, mentions, hashtags, phone numbers, dates, numbers.
//! They run before the word scanner, and overlaps resolve left-to-right
//! with maximal munch, so an email never shatters into a mention plus
//! words and a date beats the bare numbers inside it.
//!
//! Patterns must not consume surrounding whitespace: whatever a pattern
//! matches becomes token *text*, and trivia has to survive untouched for
//! reconstruction. Interior whitespace in clearly-delimited forms
//! ("(555) 123-4567", "Jan 5, 2024") is fine.

use regex::Regex;
use std::sync::LazyLock;

/// A compiled token pattern with the category tag it assigns.
pub struct TokenPattern {
    pub name: &'static str,
    pub tag: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! token_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// --- URLs ---
token_pattern!(
    RE_URL,
    r"https?://[\w\-.~:/?#@!$&*+,;=%]*[\w\-~/#=&]"
);
token_pattern!(
    RE_WWW,
    r"\bwww\.[\w\-.~:/?#@!$&*+,;=%]*[\w\-~/#=&]"
);

// --- Email ---
token_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// --- Social handles ---
token_pattern!(RE_AT_MENTION, r"@[A-Za-z0-9_]+");
token_pattern!(RE_HASH_TAG, r"#[A-Za-z0-9_]+");

// --- Phone numbers (US-style; separators required) ---
token_pattern!(
    RE_PHONE,
    r"(?:\(\d{3}\)|\b\d{3})[-.\s]\d{3}[-.\s]?\d{4}\b"
);

// --- Dates ---
token_pattern!(RE_DATE_ISO, r"\b\d{4}-\d{2}-\d{2}\b");
token_pattern!(
    RE_DATE_NUMERIC,
    r"\b(?:0?[1-9]|1[0-2])[/.](?:0?[1-9]|[12]\d|3[01])[/.]\d{2}(?:\d{2})?\b"
);
token_pattern!(
    RE_DATE_MONTH,
    r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s*\d{4})?\b"
);

// --- Numeric values ---
token_pattern!(
    RE_CURRENCY,
    r"[$€£¥]\s?\d+(?:,\d{3})*(?:\.\d+)?"
);
token_pattern!(
    RE_NUMBER,
    r"\b\d+(?:,\d{3})*(?:\.\d+)?(?:st|nd|rd|th)?%?"
);

/// All token patterns in priority order (most specific first).
pub fn all_patterns() -> Vec<TokenPattern> {
    vec![
        TokenPattern {
            name: "url",
            tag: "Url",
            regex: &RE_URL,
        },
        TokenPattern {
            name: "www_url",
            tag: "Url",
            regex: &RE_WWW,
        },
        TokenPattern {
            name: "email",
            tag: "Email",
            regex: &RE_EMAIL,
        },
        TokenPattern {
            name: "at_mention",
            tag: "AtMention",
            regex: &RE_AT_MENTION,
        },
        TokenPattern {
            name: "hash_tag",
            tag: "HashTag",
            regex: &RE_HASH_TAG,
        },
        TokenPattern {
            name: "phone",
            tag: "PhoneNumber",
            regex: &RE_PHONE,
        },
        TokenPattern {
            name: "date_iso",
            tag: "Date",
            regex: &RE_DATE_ISO,
        },
        TokenPattern {
            name: "date_numeric",
            tag: "Date",
            regex: &RE_DATE_NUMERIC,
        },
        TokenPattern {
            name: "date_month",
            tag: "Date",
            regex: &RE_DATE_MONTH,
        },
        TokenPattern {
            name: "currency",
            tag: "Value",
            regex: &RE_CURRENCY,
        },
        TokenPattern {
            name: "number",
            tag: "Value",
            regex: &RE_NUMBER,
        },
    ]
}

/// A resolved pattern match: byte range plus the tag it assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpan {
    pub start: usize,
    pub end: usize,
    pub tag: &'static str,
}

/// Runs every pattern and resolves overlaps.
///
/// Returns non-overlapping spans sorted by start position. Overlaps
/// resolve like a lexer: earliest start wins, the longest match wins at
/// the same start, and listing order breaks remaining ties.
pub fn scan(text: &str) -> Vec<PatternSpan> {
    let mut matches: Vec<(usize, usize, usize, &'static str)> = Vec::new();

    for (priority, pattern) in all_patterns().iter().enumerate() {
        let Some(re) = pattern.regex.as_ref() else {
            continue;
        };
        for m in re.find_iter(text) {
            matches.push((m.start(), m.end(), priority, pattern.tag));
        }
    }

    matches.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));

    let mut spans: Vec<PatternSpan> = Vec::new();
    for (start, end, _, tag) in matches {
        if spans.last().map_or(true, |prev| start >= prev.end) {
            spans.push(PatternSpan { start, end, tag });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_texts<'a>(text: &'a str, spans: &[PatternSpan]) -> Vec<(&'a str, &'static str)> {
        spans.iter().map(|s| (&text[s.start..s.end], s.tag)).collect()
    }

    #[test]
    fn test_scan_finds_structured_tokens() {
        let text = "Mail bob@example.com or visit https://example.com/a today";
        let spans = scan(text);

        assert_eq!(
            span_texts(text, &spans),
            vec![
                ("bob@example.com", "Email"),
                ("https://example.com/a", "Url"),
            ]
        );
    }

    #[test]
    fn test_email_wins_over_embedded_mention() {
        let text = "write to alice@example.org now";
        let spans = scan(text);

        assert_eq!(span_texts(text, &spans), vec![("alice@example.org", "Email")]);
    }

    #[test]
    fn test_mention_and_hashtag() {
        let text = "ping @bob about #launch";
        let spans = scan(text);

        assert_eq!(
            span_texts(text, &spans),
            vec![("@bob", "AtMention"), ("#launch", "HashTag")]
        );
    }

    #[test]
    fn test_phone_beats_bare_numbers() {
        let text = "call (555) 123-4567 or 555-123-4567";
        let spans = scan(text);

        assert_eq!(
            span_texts(text, &spans),
            vec![
                ("(555) 123-4567", "PhoneNumber"),
                ("555-123-4567", "PhoneNumber"),
            ]
        );
    }

    #[test]
    fn test_unseparated_digits_are_values() {
        let spans = scan("id 5551234567 end");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].tag, "Value");
    }

    #[test]
    fn test_date_formats() {
        let text = "due 2024-03-15 or 3/15/2024 or Jan 5, 2024";
        let spans = scan(text);

        assert_eq!(
            span_texts(text, &spans),
            vec![
                ("2024-03-15", "Date"),
                ("3/15/2024", "Date"),
                ("Jan 5, 2024", "Date"),
            ]
        );
    }

    #[test]
    fn test_values_and_currency() {
        let text = "paid $1,200.50 which is 15% of 8000";
        let spans = scan(text);

        assert_eq!(
            span_texts(text, &spans),
            vec![("$1,200.50", "Value"), ("15%", "Value"), ("8000", "Value")]
        );
    }

    #[test]
    fn test_no_match_in_plain_prose() {
        assert!(scan("nothing structured here").is_empty());
    }

    #[test]
    fn test_spans_never_include_outer_whitespace() {
        let text = "  7/04/1776  ";
        let spans = scan(text);

        assert_eq!(spans.len(), 1);
        let matched = &text[spans[0].start..spans[0].end];
        assert_eq!(matched, matched.trim());
    }

    #[test]
    fn test_digits_glued_to_letters_are_not_values() {
        // "v2" and "abc123" are word runs, not numbers
        assert!(scan("build v2 of abc123").is_empty());
    }
}
