use serde::Serialize;

use crate::{
    analytics::Statistics,
    config::{DivisorPair, NumberRange},
    model::ClassifiedNumber,
};

/// A classified range together with its statistics; the input of every export renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub range: NumberRange,
    pub divisors: DivisorPair,
    pub statistics: Statistics,
    pub numbers: Vec<ClassifiedNumber>,
}

impl Report {
    /// Generate, classify and tally every member of `range`.
    pub fn build(range: NumberRange, divisors: DivisorPair) -> Self {
        let numbers: Vec<ClassifiedNumber> = range.iter().map(|n| divisors.inspect(n)).collect();
        let statistics = Statistics::from_labels(numbers.iter().map(|row| row.label));
        Self { range, divisors, statistics, numbers }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}
