use serde::Serialize;

use crate::classify::Label;

/// One row of a classified range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedNumber {
    pub number: i64,
    pub label: Label,
    pub divisible_by_first: bool,
    pub divisible_by_second: bool,
}

impl ClassifiedNumber {
    #[inline]
    pub const fn divisible_by_both(&self) -> bool {
        self.divisible_by_first && self.divisible_by_second
    }
}
