//! Non-destructive sensitivity preview.
//!
//! A preview runs the same walk as the encoder but seals nothing:
//! it returns the text as ordered segments flagged sensitive or not,
//! for callers that want to highlight what *would* be encrypted before
//! committing. Concatenating the segments reproduces the input exactly.

use serde::Serialize;

use crate::classify::is_sensitive;
use crate::policy::Policy;
use crate::tagger::TaggerRegistry;
use crate::token::Tokenizer;

/// A run of text that is uniformly sensitive or uniformly plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The exact source characters of this run
    pub text: String,

    /// Whether the encoder would seal this run
    pub sensitive: bool,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sensitive: false,
        }
    }

    fn sensitive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sensitive: true,
        }
    }
}

/// Splits `text` into maximal segments by sensitivity verdict.
///
/// Trivia is always plain; adjacent pieces with the same verdict are
/// merged, so no two consecutive segments share a flag and no segment
/// is empty. Empty input yields no segments.
pub fn preview(
    text: &str,
    tokenizer: &dyn Tokenizer,
    registry: &TaggerRegistry,
    policy: &Policy,
) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    if text.is_empty() {
        return segments;
    }

    for token in tokenizer.tokenize(text) {
        push_merged(&mut segments, Segment::plain(&token.leading_trivia));
        if is_sensitive(&token, policy, registry) {
            push_merged(&mut segments, Segment::sensitive(&token.text));
        } else {
            push_merged(&mut segments, Segment::plain(&token.text));
        }
        push_merged(&mut segments, Segment::plain(&token.trailing_trivia));
    }

    segments
}

fn push_merged(segments: &mut Vec<Segment>, segment: Segment) {
    if segment.text.is_empty() {
        return;
    }
    if let Some(last) = segments.last_mut() {
        if last.sensitive == segment.sensitive {
            last.text.push_str(&segment.text);
            return;
        }
    }
    segments.push(segment);
}
