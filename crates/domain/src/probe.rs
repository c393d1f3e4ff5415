// crates/domain/src/probe.rs
use crate::{
    classify::Label,
    config::{DivisorPair, NumberRange},
};

/// Result of checking a single probe number against the active range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    InRange { number: i64, label: Label },
    BelowMin { number: i64, min: i64 },
    AboveMax { number: i64, max: i64 },
}

impl ProbeOutcome {
    /// Classify `number` only when it lies inside `range`.
    pub fn check(number: i64, range: NumberRange, divisors: DivisorPair) -> Self {
        if number < range.min() {
            Self::BelowMin { number, min: range.min() }
        } else if number > range.max() {
            Self::AboveMax { number, max: range.max() }
        } else {
            Self::InRange { number, label: divisors.classify(number) }
        }
    }

    pub const fn label(&self) -> Option<Label> {
        match self {
            Self::InRange { label, .. } => Some(*label),
            _ => None,
        }
    }
}
