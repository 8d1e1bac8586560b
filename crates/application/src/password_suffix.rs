//! Random source for the two-digit temporary password suffix.

use rand::Rng;
use sedapal_core::AppResult;
use sedapal_domain::{PASSWORD_SUFFIX_MAX, PASSWORD_SUFFIX_MIN};

/// Port producing a value in `10..=99` for temporary passwords.
pub trait PasswordSuffixSource: Send + Sync {
    /// Returns the next suffix.
    fn next_suffix(&self) -> AppResult<u8>;
}

/// Suffix source backed by the thread-local RNG, seeded from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomPasswordSuffix;

impl OsRandomPasswordSuffix {
    /// Creates the source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PasswordSuffixSource for OsRandomPasswordSuffix {
    fn next_suffix(&self) -> AppResult<u8> {
        Ok(rand::rng().random_range(PASSWORD_SUFFIX_MIN..=PASSWORD_SUFFIX_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::{OsRandomPasswordSuffix, PasswordSuffixSource};

    #[test]
    fn suffixes_stay_in_range() {
        let source = OsRandomPasswordSuffix::new();
        for _ in 0..500 {
            match source.next_suffix() {
                Ok(value) => assert!((10..=99).contains(&value), "got {value}"),
                Err(error) => panic!("suffix generation failed: {error}"),
            }
        }
    }

    #[test]
    fn both_bounds_are_reachable() {
        let source = OsRandomPasswordSuffix::new();
        let drawn: Vec<u8> = (0..5000)
            .filter_map(|_| source.next_suffix().ok())
            .collect();

        assert_eq!(drawn.len(), 5000);
        assert!(drawn.contains(&10));
        assert!(drawn.contains(&99));
    }
}
