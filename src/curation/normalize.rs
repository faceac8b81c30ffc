use std::collections::HashSet;

use serde::Serialize;

const WORD_LEN: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    pub total_in: usize,
    pub blank_lines: usize,
    pub rejected_shape: usize,
    pub duplicates_removed: usize,
    pub kept: usize,
}

/// Trim, uppercase, keep five-ASCII-letter words only, and drop repeats
/// (first occurrence wins). Input order is preserved.
pub fn normalize_words<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, NormalizeStats) {
    let mut stats = NormalizeStats {
        total_in: lines.len(),
        ..NormalizeStats::default()
    };
    let mut seen = HashSet::with_capacity(lines.len());
    let mut kept = Vec::with_capacity(lines.len());

    for raw in lines {
        let word = raw.as_ref().trim();
        if word.is_empty() {
            stats.blank_lines += 1;
            continue;
        }
        if word.len() != WORD_LEN || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            stats.rejected_shape += 1;
            continue;
        }

        let word = word.to_ascii_uppercase();
        if !seen.insert(word.clone()) {
            stats.duplicates_removed += 1;
            continue;
        }
        kept.push(word);
    }

    stats.kept = kept.len();
    (kept, stats)
}
