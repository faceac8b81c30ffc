pub mod blocklist;
pub mod normalize;
pub mod plurals;

use std::collections::HashSet;

use serde::Serialize;

pub use blocklist::Blocklist;
pub use normalize::{normalize_words, NormalizeStats};
pub use plurals::{
    is_listed_past_tense, is_listed_plural, is_plural, past_tense_roots, plural_roots,
};

/// Which heuristic filters to run after normalisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurationOptions {
    pub suffix_plurals: bool,
    pub listed_plurals: bool,
    pub past_tense: bool,
}

/// Counts reported by a curation run. Each removed word is attributed to the
/// first filter that rejected it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CurationStats {
    pub normalize: NormalizeStats,
    pub removed_suffix_plurals: usize,
    pub removed_past_tense: usize,
    pub removed_listed_plurals: usize,
    pub removed_blocklisted: usize,
    pub kept: usize,
}

#[derive(Debug, Clone)]
pub struct CurationResult {
    pub words: Vec<String>,
    pub stats: CurationStats,
}

pub struct Curator {
    options: CurationOptions,
    blocklist: Blocklist,
}

impl Curator {
    pub fn new(options: CurationOptions, blocklist: Blocklist) -> Self {
        Self { options, blocklist }
    }

    pub fn curate<S: AsRef<str>>(&self, lines: &[S]) -> CurationResult {
        // Roots are looked up in the raw input, four-letter words included,
        // so the set is built before the shape filter runs.
        let listed: HashSet<String> = if self.options.listed_plurals || self.options.past_tense {
            lines
                .iter()
                .map(|l| l.as_ref().trim().to_ascii_uppercase())
                .filter(|w| !w.is_empty())
                .collect()
        } else {
            HashSet::new()
        };

        let (normalized, normalize) = normalize_words(lines);

        let mut stats = CurationStats {
            normalize,
            ..CurationStats::default()
        };
        let mut words = Vec::with_capacity(normalized.len());

        for word in normalized {
            if self.options.suffix_plurals && is_plural(&word) {
                stats.removed_suffix_plurals += 1;
                tracing::trace!(%word, "removed by suffix rule");
                continue;
            }
            if self.options.past_tense && is_listed_past_tense(&word, &listed) {
                stats.removed_past_tense += 1;
                tracing::trace!(%word, "removed as past tense of listed root");
                continue;
            }
            if self.options.listed_plurals && is_listed_plural(&word, &listed) {
                stats.removed_listed_plurals += 1;
                tracing::trace!(%word, "removed as plural of listed root");
                continue;
            }
            if self.blocklist.contains(&word) {
                stats.removed_blocklisted += 1;
                tracing::trace!(%word, "removed by blocklist");
                continue;
            }
            words.push(word);
        }

        stats.kept = words.len();
        tracing::info!(
            total_in = stats.normalize.total_in,
            kept = stats.kept,
            "curated word list"
        );

        CurationResult { words, stats }
    }
}
