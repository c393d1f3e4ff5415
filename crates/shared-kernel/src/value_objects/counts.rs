// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Number of sequence members that fell into one label category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TallyCount(usize);

impl TallyCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Increment by one, saturating at `usize::MAX`.
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for TallyCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for TallyCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Add<usize> for TallyCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0.saturating_add(rhs))
    }
}

impl AddAssign for TallyCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<usize> for TallyCount {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl Zero for TallyCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for TallyCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a TallyCount> for TallyCount {
    fn sum<I: Iterator<Item = &'a TallyCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<usize> for TallyCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<TallyCount> for usize {
    fn from(value: TallyCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for TallyCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::TallyCount;

    impl fmt::Display for TallyCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
