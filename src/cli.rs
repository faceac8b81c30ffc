use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daily word selection and word-list curation.
#[derive(Parser)]
#[command(
    name = "daily-word",
    version,
    about = "Deterministic daily word selection and word-list curation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the word for a date.
    Select(SelectArgs),
    /// Print the 32-bit seed for a date.
    Seed(SeedArgs),
    /// Build a scored word-list table from a commonality-ordered word list.
    Table(TableArgs),
    /// Normalise and filter a plain word list.
    Curate(CurateArgs),
}

/// Arguments for the `select` subcommand.
#[derive(clap::Args)]
pub struct SelectArgs {
    /// Word-list table (TSV with a header line). Overrides [selector].wordlist.
    #[arg(short, long)]
    pub wordlist: Option<PathBuf>,

    /// Date in YYYY-MM-DD form. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print the full selection as JSON instead of the bare word.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `seed` subcommand.
#[derive(clap::Args)]
pub struct SeedArgs {
    /// Date in YYYY-MM-DD form. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// Input word list, one word per line, most common first.
    pub input: PathBuf,

    /// Output TSV table.
    pub output: PathBuf,

    /// Weight of the commonality component.
    #[arg(long)]
    pub weight_commonality: Option<f64>,

    /// Weight of the letter-value component.
    #[arg(long)]
    pub weight_scrabble: Option<f64>,

    /// Fraction of words assigned PAR 3.
    #[arg(long)]
    pub easy_percent: Option<f64>,

    /// Fraction of words assigned PAR 5.
    #[arg(long)]
    pub hard_percent: Option<f64>,
}

/// Arguments for the `curate` subcommand.
#[derive(clap::Args)]
pub struct CurateArgs {
    /// Input word list, one word per line.
    pub input: PathBuf,

    /// Output word list.
    pub output: PathBuf,

    /// Words to remove, one per line. Overrides [curation].blocklist.
    #[arg(short, long)]
    pub blocklist: Option<PathBuf>,

    /// Drop words that look plural by suffix.
    #[arg(long)]
    pub suffix_plurals: bool,

    /// Drop words whose singular root is also in the input.
    #[arg(long)]
    pub listed_plurals: bool,

    /// Drop -ED words whose base form is also in the input.
    #[arg(long)]
    pub past_tense: bool,
}
