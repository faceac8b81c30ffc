//! Deterministic daily word selection for five-letter guessing games.
//!
//! `daily-word` maps a calendar date to one word of an ordered word list
//! using a 32-bit polynomial rolling hash, so every client that holds the same
//! list agrees on the same answer without any shared state. The crate also
//! carries the offline tooling used to build that list: TSV table loading and
//! writing, letter-value scoring with PAR buckets, and heuristic curation
//! filters.

pub mod config;
pub mod curation;
pub mod selection;
pub mod types;
pub mod wordlist;
