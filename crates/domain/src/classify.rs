// crates/domain/src/classify.rs
//! Divisibility labels.

use std::fmt;

use robotict_shared_kernel::DomainResult;
use serde::{Serialize, Serializer};

use crate::config::DivisorPair;

/// Classification of a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Divisible by both divisors.
    RobotIct,
    /// Divisible by the first divisor only.
    Robot,
    /// Divisible by the second divisor only.
    Ict,
    /// Divisible by neither; rendered as the number itself.
    Number(i64),
}

impl Label {
    pub const fn category(self) -> Category {
        match self {
            Self::RobotIct => Category::RobotIct,
            Self::Robot => Category::Robot,
            Self::Ict => Category::Ict,
            Self::Number(_) => Category::Plain,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RobotIct => f.write_str("RobotICT"),
            Self::Robot => f.write_str("Robot"),
            Self::Ict => f.write_str("ICT"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The four statistics buckets, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Robot,
    Ict,
    RobotIct,
    Plain,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Robot, Self::Ict, Self::RobotIct, Self::Plain];

    /// Caption used in statistics blocks of exported documents.
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Robot => "Robot",
            Self::Ict => "ICT",
            Self::RobotIct => "RobotICT",
            Self::Plain => "Numbers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Classify `n` against `first`/`second`.
///
/// Both divisors are validated on every call; use [`DivisorPair::classify`]
/// when classifying many numbers against the same pair.
///
/// # Errors
///
/// Returns `InvalidDivisor` when either divisor is zero or negative.
pub fn classify(n: i64, first: i64, second: i64) -> DomainResult<Label> {
    Ok(DivisorPair::new(first, second)?.classify(n))
}
