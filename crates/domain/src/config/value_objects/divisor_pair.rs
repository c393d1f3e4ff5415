// crates/domain/src/config/value_objects/divisor_pair.rs
use robotict_shared_kernel::{DivisorSlot, DomainError, DomainResult};
use serde::Serialize;

use crate::{classify::Label, model::ClassifiedNumber};

/// The two positive divisors driving the `Robot` and `ICT` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DivisorPair {
    first: i64,
    second: i64,
}

impl DivisorPair {
    pub const DEFAULT_FIRST: i64 = 3;
    pub const DEFAULT_SECOND: i64 = 5;

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDivisor`] for a zero or negative divisor.
    pub fn new(first: i64, second: i64) -> DomainResult<Self> {
        check_positive(DivisorSlot::First, first)?;
        check_positive(DivisorSlot::Second, second)?;
        Ok(Self { first, second })
    }

    #[inline]
    pub const fn first(self) -> i64 {
        self.first
    }

    #[inline]
    pub const fn second(self) -> i64 {
        self.second
    }

    #[inline]
    pub const fn divides_first(self, n: i64) -> bool {
        n % self.first == 0
    }

    #[inline]
    pub const fn divides_second(self, n: i64) -> bool {
        n % self.second == 0
    }

    /// Label `n`. Total, because both divisors are known to be positive.
    pub const fn classify(self, n: i64) -> Label {
        match (self.divides_first(n), self.divides_second(n)) {
            (true, true) => Label::RobotIct,
            (true, false) => Label::Robot,
            (false, true) => Label::Ict,
            (false, false) => Label::Number(n),
        }
    }

    /// Label `n` and keep the individual divisibility flags alongside it.
    pub const fn inspect(self, n: i64) -> ClassifiedNumber {
        ClassifiedNumber {
            number: n,
            label: self.classify(n),
            divisible_by_first: self.divides_first(n),
            divisible_by_second: self.divides_second(n),
        }
    }
}

impl Default for DivisorPair {
    fn default() -> Self {
        Self { first: Self::DEFAULT_FIRST, second: Self::DEFAULT_SECOND }
    }
}

fn check_positive(which: DivisorSlot, value: i64) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::InvalidDivisor { which, value });
    }
    Ok(())
}
