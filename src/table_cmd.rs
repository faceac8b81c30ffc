//! Table command: score a plain word list into a TSV table.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use daily_word::config::DailyWordConfig;
use daily_word::curation::normalize_words;
use daily_word::wordlist::{save_table, TableBuilder};

use crate::cli::TableArgs;

pub fn run(args: TableArgs, config: &DailyWordConfig) -> Result<()> {
    let _cmd = info_span!("table").entered();

    // CLI flags take precedence over [table]
    let mut build_config = config.table.clone();
    if let Some(w) = args.weight_commonality {
        build_config.weight_commonality = w;
    }
    if let Some(w) = args.weight_scrabble {
        build_config.weight_scrabble = w;
    }
    if let Some(p) = args.easy_percent {
        build_config.easy_percent = p;
    }
    if let Some(p) = args.hard_percent {
        build_config.hard_percent = p;
    }

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read word list: {}", args.input.display()))?;
    let lines: Vec<&str> = contents.lines().collect();
    let (words, stats) = normalize_words(&lines);
    info!(kept = stats.kept, rejected = stats.rejected_shape, "input normalised");

    let builder = TableBuilder::new(build_config);
    let list = builder
        .build(&args.input.display().to_string(), &words)
        .context("failed to build word-list table")?;

    save_table(&list, &args.output)
        .with_context(|| format!("failed to write table: {}", args.output.display()))?;

    let dist = list.par_distribution();
    println!("Words: {}", list.len());
    println!(
        "PAR distribution: 3={}, 4={}, 5={}",
        dist.three, dist.four, dist.five
    );
    println!("Fingerprint: {}", list.fingerprint());
    println!("Wrote: {}", args.output.display());
    Ok(())
}
