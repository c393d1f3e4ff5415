pub mod divisor_pair;
pub mod number_range;

pub use divisor_pair::DivisorPair;
pub use number_range::NumberRange;
