use std::{fs, path::Path};

/// Convenience helpers for reading small text files.
pub struct FileReader;

impl FileReader {
    /// Read the whole file as UTF-8.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}
