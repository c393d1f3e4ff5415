pub mod entities;
pub mod value_objects;

pub use entities::ClassifiedNumber;
pub use value_objects::Report;
