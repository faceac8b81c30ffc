use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ListFingerprint;
use super::entry::{DifficultyTier, Par, WordEntry};

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Word list `{list}` has no header line")]
    MissingHeader { list: String },
    #[error("Word list `{list}` line {line}: invalid {field} value {value:?}")]
    InvalidField {
        list: String,
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Word list `{list}` line {line}: empty word")]
    EmptyWord { list: String, line: usize },
    #[error("Word list `{list}` contains an empty word or a word with a line break: {word:?}")]
    InvalidWord { list: String, word: String },
    #[error("Word list `{list}` contains duplicate word {word}")]
    DuplicateWord { list: String, word: String },
}

/// An ordered, immutable sequence of word entries.
///
/// Order is the selection contract: inserting, removing or reordering a
/// single entry changes the answer for most future dates.
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    source: String,
    entries: Vec<WordEntry>,
    fingerprint: ListFingerprint,
}

/// Count of entries per PAR bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParDistribution {
    pub three: usize,
    pub four: usize,
    pub five: usize,
    pub unset: usize,
}

impl WordList {
    /// Build a list from entries, rejecting duplicate words and words that are
    /// empty or contain `\n` (either would make two lists share a
    /// fingerprint).
    pub fn new(source: impl Into<String>, entries: Vec<WordEntry>) -> Result<Self, WordListError> {
        let source = source.into();

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.word.is_empty() || entry.word.contains('\n') {
                return Err(WordListError::InvalidWord {
                    list: source,
                    word: entry.word.clone(),
                });
            }
            if !seen.insert(entry.word.as_str()) {
                return Err(WordListError::DuplicateWord {
                    list: source,
                    word: entry.word.clone(),
                });
            }
        }

        let fingerprint = ListFingerprint::from_words(entries.iter().map(|e| e.word.as_str()));

        Ok(WordList {
            source,
            entries,
            fingerprint,
        })
    }

    pub fn from_words<I, S>(source: impl Into<String>, words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = words.into_iter().map(WordEntry::new).collect();
        Self::new(source, entries)
    }

    /// Where the list came from, used in error messages.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.word == word)
    }

    /// Positional tier; words absent from the list are `Medium`.
    pub fn tier_of(&self, word: &str) -> DifficultyTier {
        match self.position(word) {
            Some(position) => DifficultyTier::for_position(position, self.len()),
            None => DifficultyTier::Medium,
        }
    }

    pub fn fingerprint(&self) -> &ListFingerprint {
        &self.fingerprint
    }

    pub fn par_distribution(&self) -> ParDistribution {
        let mut dist = ParDistribution::default();
        for entry in &self.entries {
            match entry.par {
                Some(Par::Three) => dist.three += 1,
                Some(Par::Four) => dist.four += 1,
                Some(Par::Five) => dist.five += 1,
                None => dist.unset += 1,
            }
        }
        dist
    }
}
