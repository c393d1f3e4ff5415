// crates/ports/src/delivery.rs
use robotict_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Where a document ended up and how large it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivered {
    pub location: String,
    pub bytes: usize,
}

/// Port for storing or emitting a finished document.
pub trait DocumentSink: Send + Sync {
    fn deliver(&self, name: &str, contents: &[u8]) -> Result<Delivered>;
}
