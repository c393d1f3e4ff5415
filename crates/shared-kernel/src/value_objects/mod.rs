pub mod counts;

pub use counts::TallyCount;
