pub mod seed;

use crate::types::{DailyPick, DateKey, SelectionError};
use crate::wordlist::WordList;
pub use seed::{rolling_hash, seed_for_date, PolynomialHasher, SeedHasher, SEED_PREFIX};

const IN_MEMORY_LIST: &str = "<in-memory>";

/// `seed mod len`, or `None` for an empty list.
pub fn index_for_seed(seed: u32, len: usize) -> Option<usize> {
	if len == 0 {
		return None;
	}
	Some((u64::from(seed) % len as u64) as usize)
}

/// Pick the word for `date` from a plain slice.
///
/// The result is always an element of `words`; the same `(date, words)` pair
/// always yields the same element.
pub fn select_word<'a, T>(date: &str, words: &'a [T]) -> Result<&'a T, SelectionError> {
	let index = index_for_seed(seed_for_date(date), words.len()).ok_or_else(|| {
		SelectionError::EmptyWordList {
			list: IN_MEMORY_LIST.to_string(),
		}
	})?;
	Ok(&words[index])
}

pub struct DailySelector<H> {
	hasher: H,
}

impl Default for DailySelector<PolynomialHasher> {
	fn default() -> Self {
		Self {
			hasher: PolynomialHasher::default(),
		}
	}
}

impl<H> DailySelector<H>
where
	H: SeedHasher,
{
	pub fn new(hasher: H) -> Self {
		Self { hasher }
	}

	pub fn pick(&self, list: &WordList, date: &DateKey) -> Result<DailyPick, SelectionError> {
		if !date.is_ascii() {
			return Err(SelectionError::NonAsciiDate(date.as_str().to_string()));
		}

		let seed = self.hasher.seed(date.as_str());
		let index = index_for_seed(seed, list.len()).ok_or_else(|| SelectionError::EmptyWordList {
			list: list.source().to_string(),
		})?;

		debug_assert!(index < list.len());
		let entry = &list.entries()[index];

		tracing::debug!(
			date = %date,
			seed,
			index,
			word = %entry.word,
			list_size = list.len(),
			"selected daily word"
		);

		Ok(DailyPick {
			date: date.as_str().to_string(),
			word: entry.word.clone(),
			index,
			seed,
			list_size: list.len(),
			list_version: list.fingerprint().as_str().to_string(),
		})
	}
}
