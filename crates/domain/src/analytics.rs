pub mod aggregate;

pub use aggregate::Statistics;
