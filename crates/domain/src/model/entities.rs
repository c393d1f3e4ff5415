pub mod classified_number;

pub use classified_number::ClassifiedNumber;
