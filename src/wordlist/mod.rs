pub mod builder;
pub mod entry;
pub mod list;
pub mod table;

pub use builder::{scrabble_score, TableBuildConfig, TableBuildError, TableBuilder};
pub use entry::{DifficultyTier, Par, WordEntry};
pub use list::{ParDistribution, WordList, WordListError};
pub use table::{format_difficulty, load_table, parse_table, save_table, write_table, TABLE_HEADER};
