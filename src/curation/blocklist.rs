use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Words to strip from a list regardless of other filters: proper nouns,
/// brand names, foreign words, offensive terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    words: HashSet<String>,
}

impl Blocklist {
    /// One word per line; blank lines and `#` comments are ignored. Matching
    /// is case-insensitive.
    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_ascii_uppercase())
            .collect();
        Blocklist { words }
    }

    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Blocklist {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
