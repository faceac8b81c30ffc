use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected number of guesses for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Par {
    Three,
    Four,
    Five,
}

impl Par {
    pub fn as_u8(self) -> u8 {
        match self {
            Par::Three => 3,
            Par::Four => 4,
            Par::Five => 5,
        }
    }
}

impl From<Par> for u8 {
    fn from(par: Par) -> u8 {
        par.as_u8()
    }
}

impl TryFrom<u8> for Par {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Par::Three),
            4 => Ok(Par::Four),
            5 => Ok(Par::Five),
            other => Err(format!("PAR must be 3, 4 or 5, got {other}")),
        }
    }
}

impl fmt::Display for Par {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Coarse difficulty label derived from a word's position in a
/// commonality-ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// First third is easy, last third is hard.
    pub fn for_position(position: usize, len: usize) -> Self {
        if len == 0 {
            return DifficultyTier::Medium;
        }
        let percentile = position as f64 / len as f64;
        if percentile <= 0.33 {
            DifficultyTier::Easy
        } else if percentile > 0.66 {
            DifficultyTier::Hard
        } else {
            DifficultyTier::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the word-list table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub difficulty: Option<f64>,
    pub scrabble_score: Option<u32>,
    pub par: Option<Par>,
}

impl WordEntry {
    /// An entry with no metadata.
    pub fn new(word: impl Into<String>) -> Self {
        WordEntry {
            word: word.into(),
            difficulty: None,
            scrabble_score: None,
            par: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(DifficultyTier::for_position(0, 100), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::for_position(33, 100), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::for_position(34, 100), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::for_position(66, 100), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::for_position(67, 100), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::for_position(0, 0), DifficultyTier::Medium);
    }

    #[test]
    fn par_rejects_out_of_range() {
        assert_eq!(Par::try_from(4), Ok(Par::Four));
        assert!(Par::try_from(6).is_err());
        assert_eq!(serde_json::to_string(&Par::Five).unwrap(), "5");
    }
}
