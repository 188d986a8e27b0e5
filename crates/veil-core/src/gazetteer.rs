//! Word lists mapping known terms to category tags.
//!
//! A [`Gazetteer`] is the lookup half of classification: a normalized
//! word-to-tags map built in code or loaded from a JSON file shaped as
//! `{"Category": ["word", ...]}`. The built-in tokenizer uses one to tag
//! name-like words (Person, Place, Organization, Demonym), and the same
//! type doubles as a [`WordTagger`] for per-language secondary lists.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, VeilError};
use crate::policy::normalize_word;
use crate::tagger::WordTagger;

/// A normalized word-to-category-tags lookup table.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    words: HashMap<String, BTreeSet<String>>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word under a category tag.
    ///
    /// Words are normalized (trimmed, lowercased) on the way in; empty
    /// words are silently ignored. A word may carry several tags.
    pub fn insert(&mut self, tag: impl Into<String>, word: &str) {
        let word = normalize_word(word);
        if word.is_empty() {
            return;
        }
        self.words.entry(word).or_default().insert(tag.into());
    }

    /// Builds a gazetteer from `(tag, words)` pairs.
    pub fn from_entries<'a, I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, W)>,
        W: IntoIterator<Item = &'a str>,
    {
        let mut gazetteer = Self::new();
        for (tag, words) in entries {
            for word in words {
                gazetteer.insert(tag, word);
            }
        }
        gazetteer
    }

    /// Loads a gazetteer from a JSON reader.
    ///
    /// The expected shape is a map from category tag to word list:
    ///
    /// ```json
    /// {"Person": ["alice", "bob"], "Place": ["paris"]}
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Json`] on malformed JSON and
    /// [`VeilError::InvalidInput`] when a category key is empty.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_reader(reader)?;

        let mut gazetteer = Self::new();
        for (tag, words) in raw {
            let tag = tag.trim();
            if tag.is_empty() {
                return Err(VeilError::InvalidInput(
                    "Gazetteer category name cannot be empty".to_string(),
                ));
            }
            for word in &words {
                gazetteer.insert(tag, word);
            }
        }
        Ok(gazetteer)
    }

    /// Loads a gazetteer from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Io`] when the file cannot be read, plus the
    /// errors of [`Gazetteer::from_json_reader`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Merges another gazetteer into this one.
    pub fn merge(&mut self, other: Gazetteer) {
        for (word, tags) in other.words {
            self.words.entry(word).or_default().extend(tags);
        }
    }

    /// Looks up the tags for a word, normalizing it first.
    ///
    /// Returns an empty set for unknown words.
    pub fn lookup(&self, word: &str) -> BTreeSet<String> {
        self.words
            .get(&normalize_word(word))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordTagger for Gazetteer {
    fn tag_word(&self, word: &str) -> BTreeSet<String> {
        self.lookup(word)
    }
}
