/// Literal prepended to the date before hashing.
pub const SEED_PREFIX: &str = "TARGET:";

const MULTIPLIER: u32 = 31;

/// Polynomial rolling hash: `acc = acc * 31 + code_point`, wrapping at 2^32
/// after every step. The empty string hashes to 0.
pub fn rolling_hash(input: &str) -> u32 {
    fold_chars(0, input)
}

/// Seed for a date string under the default `"TARGET:"` prefix.
///
/// Defined for every string; only ASCII keys are part of the cross-client
/// contract.
pub fn seed_for_date(date: &str) -> u32 {
    PolynomialHasher::default().seed(date)
}

fn fold_chars(acc: u32, input: &str) -> u32 {
    input
        .chars()
        .fold(acc, |acc, c| acc.wrapping_mul(MULTIPLIER).wrapping_add(c as u32))
}

pub trait SeedHasher {
    fn seed(&self, date: &str) -> u32;
}

/// v0: prefix + rolling hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialHasher {
    prefix: String,
}

impl Default for PolynomialHasher {
    fn default() -> Self {
        Self {
            prefix: SEED_PREFIX.to_string(),
        }
    }
}

impl PolynomialHasher {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl SeedHasher for PolynomialHasher {
    fn seed(&self, date: &str) -> u32 {
        // Folding the prefix first is the same as hashing the concatenation.
        fold_chars(fold_chars(0, &self.prefix), date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(rolling_hash(""), 0);
    }

    #[test]
    fn single_char_is_its_code_point() {
        assert_eq!(rolling_hash("A"), 65);
        assert_eq!(rolling_hash("AB"), 65 * 31 + 66);
    }

    #[test]
    fn prefix_fold_matches_concatenation() {
        let hasher = PolynomialHasher::default();
        assert_eq!(hasher.seed("2026-01-24"), rolling_hash("TARGET:2026-01-24"));
        assert_eq!(hasher.seed(""), rolling_hash("TARGET:"));
    }

    #[test]
    fn custom_prefix_changes_seed() {
        let custom = PolynomialHasher::with_prefix("GOLF:");
        assert_eq!(custom.prefix(), "GOLF:");
        assert_ne!(custom.seed("2026-01-24"), seed_for_date("2026-01-24"));
    }
}
