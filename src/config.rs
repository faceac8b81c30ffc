use std::fs;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::Deserialize;
use thiserror::Error;

use crate::curation::CurationOptions;
use crate::selection::SEED_PREFIX;
use crate::wordlist::TableBuildConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),
}

/// Top-level configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyWordConfig {
    #[serde(default)]
    pub selector: SelectorToml,

    #[serde(default)]
    pub table: TableBuildConfig,

    #[serde(default)]
    pub curation: CurationToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorToml {
    /// Default word-list table for `select`.
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
    #[serde(default = "default_seed_prefix")]
    pub seed_prefix: String,
    /// Offset from UTC used to decide "today". Local time when unset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for SelectorToml {
    fn default() -> Self {
        Self {
            wordlist: None,
            seed_prefix: default_seed_prefix(),
            utc_offset_minutes: None,
        }
    }
}

fn default_seed_prefix() -> String {
    SEED_PREFIX.to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurationToml {
    #[serde(default)]
    pub blocklist: Option<PathBuf>,
    #[serde(default)]
    pub suffix_plurals: bool,
    #[serde(default)]
    pub listed_plurals: bool,
    #[serde(default)]
    pub past_tense: bool,
}

impl CurationToml {
    pub fn options(&self) -> CurationOptions {
        CurationOptions {
            suffix_plurals: self.suffix_plurals,
            listed_plurals: self.listed_plurals,
            past_tense: self.past_tense,
        }
    }
}

impl DailyWordConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn utc_offset(&self) -> Result<Option<FixedOffset>, ConfigError> {
        match self.selector.utc_offset_minutes {
            None => Ok(None),
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .map(Some)
                .ok_or(ConfigError::InvalidUtcOffset(minutes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = DailyWordConfig::from_toml_str("").unwrap();
        assert_eq!(config.selector.seed_prefix, "TARGET:");
        assert!(config.selector.wordlist.is_none());
        assert_eq!(config.table, TableBuildConfig::default());
        assert_eq!(config.curation.options(), CurationOptions::default());
        assert!(config.utc_offset().unwrap().is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = DailyWordConfig::from_toml_str(
            r#"
            [selector]
            wordlist = "data/wordlist-table.txt"
            utc_offset_minutes = 600

            [table]
            easy_percent = 0.25

            [curation]
            suffix_plurals = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.selector.wordlist.as_deref(),
            Some(Path::new("data/wordlist-table.txt"))
        );
        assert_eq!(config.utc_offset().unwrap(), FixedOffset::east_opt(36_000));
        assert_eq!(config.table.easy_percent, 0.25);
        assert_eq!(config.table.weight_commonality, 0.8);
        assert!(config.curation.options().suffix_plurals);
        assert!(!config.curation.options().listed_plurals);
        assert!(!config.curation.options().past_tense);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_offsets() {
        assert!(matches!(
            DailyWordConfig::from_toml_str("[selector]\nprefix = \"X\""),
            Err(ConfigError::Parse(_))
        ));

        let config = DailyWordConfig::from_toml_str("[selector]\nutc_offset_minutes = 100000").unwrap();
        assert!(matches!(config.utc_offset(), Err(ConfigError::InvalidUtcOffset(100000))));
    }
}
