//! Select and seed commands: the daily word for a date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use daily_word::config::DailyWordConfig;
use daily_word::selection::{DailySelector, PolynomialHasher, SeedHasher};
use daily_word::types::DateKey;
use daily_word::wordlist::load_table;

use crate::cli::{SeedArgs, SelectArgs};

fn resolve_date(date: Option<String>, config: &DailyWordConfig) -> Result<DateKey> {
    match date {
        Some(raw) => Ok(DateKey::new(raw)),
        None => {
            let offset = config.utc_offset()?;
            Ok(DateKey::today(offset))
        }
    }
}

/// Print the word for the requested date.
pub fn run(args: SelectArgs, config: &DailyWordConfig) -> Result<()> {
    let _cmd = info_span!("select").entered();

    let path = args
        .wordlist
        .or_else(|| config.selector.wordlist.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no word list: pass --wordlist or set [selector].wordlist in config")
        })?;
    let date = resolve_date(args.date, config)?;

    let list = load_table(&path)
        .with_context(|| format!("failed to load word list: {}", path.display()))?;
    info!(path = %path.display(), words = list.len(), "word list loaded");

    let selector = DailySelector::new(PolynomialHasher::with_prefix(&config.selector.seed_prefix));
    let pick = selector
        .pick(&list, &date)
        .with_context(|| format!("failed to select a word for {date}"))?;
    info!(date = %date, index = pick.index, seed = pick.seed, "daily word selected");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pick)?);
    } else {
        println!("{}", pick.word);
    }
    Ok(())
}

/// Print the seed for the requested date.
pub fn run_seed(args: SeedArgs, config: &DailyWordConfig) -> Result<()> {
    let date = resolve_date(args.date, config)?;
    let hasher = PolynomialHasher::with_prefix(&config.selector.seed_prefix);
    println!("{}", hasher.seed(date.as_str()));
    Ok(())
}
