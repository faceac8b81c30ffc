//! Curate command: normalise and filter a plain word list.

use std::fs;

use anyhow::{Context, Result};
use tracing::info_span;

use daily_word::config::DailyWordConfig;
use daily_word::curation::{Blocklist, Curator};

use crate::cli::CurateArgs;

pub fn run(args: CurateArgs, config: &DailyWordConfig) -> Result<()> {
    let _cmd = info_span!("curate").entered();

    let mut options = config.curation.options();
    options.suffix_plurals |= args.suffix_plurals;
    options.listed_plurals |= args.listed_plurals;
    options.past_tense |= args.past_tense;

    let blocklist = match args.blocklist.or_else(|| config.curation.blocklist.clone()) {
        Some(path) => Blocklist::load(&path)
            .with_context(|| format!("failed to read blocklist: {}", path.display()))?,
        None => Blocklist::default(),
    };

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read word list: {}", args.input.display()))?;
    let lines: Vec<&str> = contents.lines().collect();

    let result = Curator::new(options, blocklist).curate(&lines);

    let mut out = result.words.join("\n");
    out.push('\n');
    fs::write(&args.output, out)
        .with_context(|| format!("failed to write word list: {}", args.output.display()))?;

    let stats = result.stats;
    println!("Input lines:      {}", stats.normalize.total_in);
    println!("Blank lines:      {}", stats.normalize.blank_lines);
    println!("Wrong shape:      {}", stats.normalize.rejected_shape);
    println!("De-duped:         {}", stats.normalize.duplicates_removed);
    println!("Removed (suffix): {}", stats.removed_suffix_plurals);
    println!("Removed (*ed):    {}", stats.removed_past_tense);
    println!("Removed (root):   {}", stats.removed_listed_plurals);
    println!("Removed (block):  {}", stats.removed_blocklisted);
    println!("Kept:             {}", stats.kept);
    println!("Output file:      {}", args.output.display());
    Ok(())
}
