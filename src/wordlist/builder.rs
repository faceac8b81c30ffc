use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::{Par, WordEntry};
use super::list::{WordList, WordListError};

#[derive(Debug, Error)]
pub enum TableBuildError {
    #[error("Weights must be non-negative (commonality {commonality}, scrabble {scrabble})")]
    NegativeWeight { commonality: f64, scrabble: f64 },
    #[error("At least one weight must be greater than zero")]
    ZeroWeightSum,
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidPercent { name: &'static str, value: f64 },
    #[error("No words to build a table from")]
    EmptyInput,
    #[error(transparent)]
    List(#[from] WordListError),
}

// Key point:
// Serializable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableBuildConfig {
    pub weight_commonality: f64,
    pub weight_scrabble: f64,
    /// Fraction of words, easiest first, assigned PAR 3.
    pub easy_percent: f64,
    /// Fraction of words, hardest first, assigned PAR 5.
    pub hard_percent: f64,
}

impl Default for TableBuildConfig {
    fn default() -> Self {
        Self {
            weight_commonality: 0.8,
            weight_scrabble: 0.2,
            easy_percent: 0.20,
            hard_percent: 0.20,
        }
    }
}

/// Standard Scrabble tile value; anything that is not an ASCII letter is 0.
fn letter_value(c: char) -> u32 {
    match c.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

pub fn scrabble_score(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

/// Turns a commonality-ordered list of words into a scored table.
///
/// Difficulty is a weighted blend of two 0..100 components:
/// - commonality: the word's rank in the input (0 = most common),
/// - letter value: its Scrabble score normalised over the list's range.
///
/// PAR buckets are assigned by sorting on (difficulty, word). Rows keep the
/// input order.
pub struct TableBuilder {
    config: TableBuildConfig,
}

impl TableBuilder {
    pub fn new(config: TableBuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableBuildConfig {
        &self.config
    }

    fn normalized_weights(&self) -> Result<(f64, f64), TableBuildError> {
        let commonality = self.config.weight_commonality;
        let scrabble = self.config.weight_scrabble;
        if commonality < 0.0 || scrabble < 0.0 {
            return Err(TableBuildError::NegativeWeight {
                commonality,
                scrabble,
            });
        }
        let sum = commonality + scrabble;
        if sum <= 0.0 {
            return Err(TableBuildError::ZeroWeightSum);
        }
        Ok((commonality / sum, scrabble / sum))
    }

    fn check_percent(name: &'static str, value: f64) -> Result<(), TableBuildError> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(TableBuildError::InvalidPercent { name, value })
        }
    }

    pub fn build<S: AsRef<str>>(&self, source: &str, words: &[S]) -> Result<WordList, TableBuildError> {
        let (w_common, w_scrabble) = self.normalized_weights()?;
        Self::check_percent("easy_percent", self.config.easy_percent)?;
        Self::check_percent("hard_percent", self.config.hard_percent)?;

        if words.is_empty() {
            return Err(TableBuildError::EmptyInput);
        }
        let n = words.len();

        let scores: Vec<u32> = words.iter().map(|w| scrabble_score(w.as_ref())).collect();
        let scr_min = scores.iter().copied().min().unwrap_or(0) as f64;
        let scr_max = scores.iter().copied().max().unwrap_or(0) as f64;

        let difficulties: Vec<f64> = scores
            .iter()
            .enumerate()
            .map(|(idx, &score)| {
                let common = if n == 1 {
                    0.0
                } else {
                    idx as f64 / (n - 1) as f64 * 100.0
                };
                let letters = if scr_max <= scr_min {
                    0.0
                } else {
                    ((score as f64 - scr_min) / (scr_max - scr_min)).clamp(0.0, 1.0) * 100.0
                };
                w_common * common + w_scrabble * letters
            })
            .collect();

        let pars = self.assign_pars(words, &difficulties);

        let entries = words
            .iter()
            .zip(scores)
            .zip(difficulties)
            .zip(pars)
            .map(|(((word, score), difficulty), par)| WordEntry {
                word: word.as_ref().to_ascii_uppercase(),
                difficulty: Some(difficulty),
                scrabble_score: Some(score),
                par: Some(par),
            })
            .collect();

        let list = WordList::new(source, entries)?;
        tracing::info!(
            words = list.len(),
            scrabble_min = scr_min,
            scrabble_max = scr_max,
            "built word-list table"
        );
        Ok(list)
    }

    fn assign_pars<S: AsRef<str>>(&self, words: &[S], difficulties: &[f64]) -> Vec<Par> {
        let n = words.len();

        // Sort by (difficulty asc, word asc)
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            difficulties[a]
                .partial_cmp(&difficulties[b])
                .unwrap_or(Ordering::Equal)
                .then_with(|| words[a].as_ref().cmp(words[b].as_ref()))
        });

        let easy_count = (n as f64 * self.config.easy_percent).floor() as usize;
        let mut hard_count = (n as f64 * self.config.hard_percent).floor() as usize;
        if easy_count + hard_count > n {
            hard_count = n.saturating_sub(easy_count);
        }
        let hard_start = n - hard_count;

        let mut pars = vec![Par::Four; n];
        for (rank, &idx) in order.iter().enumerate() {
            pars[idx] = if rank < easy_count {
                Par::Three
            } else if rank >= hard_start {
                Par::Five
            } else {
                Par::Four
            };
        }
        pars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_values() {
        assert_eq!(scrabble_score("CRANE"), 3 + 1 + 1 + 1 + 1);
        assert_eq!(scrabble_score("jazzy"), 8 + 1 + 10 + 10 + 4);
        assert_eq!(scrabble_score("A-1"), 1);
    }

    #[test]
    fn rejects_bad_weights() {
        let builder = TableBuilder::new(TableBuildConfig {
            weight_commonality: -1.0,
            ..TableBuildConfig::default()
        });
        assert!(matches!(
            builder.build("t", &["CRANE"]),
            Err(TableBuildError::NegativeWeight { .. })
        ));

        let builder = TableBuilder::new(TableBuildConfig {
            weight_commonality: 0.0,
            weight_scrabble: 0.0,
            ..TableBuildConfig::default()
        });
        assert!(matches!(builder.build("t", &["CRANE"]), Err(TableBuildError::ZeroWeightSum)));
    }
}
