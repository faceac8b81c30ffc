use serde::{Deserialize, Serialize};

/// The outcome of a daily selection.
/// Fully self-contained and serializable, so a client can compare its own
/// answer against a server's field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPick {
    pub date: String,
    pub word: String,

    pub index: usize,
    pub seed: u32,

    pub list_size: usize,
    /// Fingerprint of the list the word was drawn from.
    pub list_version: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Word list `{list}` is empty; cannot select a word")]
    EmptyWordList { list: String },

    #[error("Date key {0:?} contains non-ASCII characters")]
    NonAsciiDate(String),
}
