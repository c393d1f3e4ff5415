// crates/domain/src/config/value_objects/number_range.rs
use std::ops::RangeInclusive;

use robotict_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

/// Inclusive `min..=max` bounds of the numbers to classify.
///
/// Construction enforces `min <= max`, so every value of this type describes a
/// non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NumberRange {
    min: i64,
    max: i64,
}

impl NumberRange {
    pub const DEFAULT_MIN: i64 = 1;
    pub const DEFAULT_MAX: i64 = 100;

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] when `min > max`.
    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(self) -> i64 {
        self.min
    }

    #[inline]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Number of members, `max - min + 1`. Widened so the full `i64` span fits.
    #[inline]
    pub fn len(self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1) as u128
    }

    /// Always false: a valid range holds at least one number.
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    #[inline]
    pub fn contains(self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Lazily iterate the members in ascending order.
    #[inline]
    pub fn iter(self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self { min: Self::DEFAULT_MIN, max: Self::DEFAULT_MAX }
    }
}

impl IntoIterator for NumberRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for NumberRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
