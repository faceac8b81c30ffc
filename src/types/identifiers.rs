use std::fmt;

use chrono::{FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The date string that seeds a daily selection.
///
/// Any string is accepted; the canonical form is `YYYY-MM-DD`. The key
/// carries no timezone: callers decide which calendar day "today" is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(raw: impl Into<String>) -> Self {
        DateKey(raw.into())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date.format(DATE_FORMAT).to_string())
    }

    /// Today's date, either at a fixed UTC offset or in the local timezone.
    pub fn today(offset: Option<FixedOffset>) -> Self {
        let date = match offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        };
        Self::from_date(date)
    }

    /// Parse the key back into a calendar date, if it is in canonical form.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).ok()
    }

    pub fn is_ascii(&self) -> bool {
        self.0.is_ascii()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of an ordered word list.
///
/// Two lists share a fingerprint only if they hold the same words in the same
/// order, which is exactly the condition under which they agree on every
/// future daily word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListFingerprint(String);

impl ListFingerprint {
    /// Hash the words joined by `\n`, in order.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut hasher = Sha256::new();
        for (i, word) in words.into_iter().enumerate() {
            if i > 0 {
                hasher.update(b"\n");
            }
            hasher.update(word.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ListFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
