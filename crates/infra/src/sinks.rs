// crates/infra/src/sinks.rs
//! Destinations for rendered export documents.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use robotict_ports::delivery::{Delivered, DocumentSink};
use robotict_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Stores documents under their suggested name inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSink for DirectorySink {
    fn deliver(&self, name: &str, contents: &[u8]) -> Result<Delivered> {
        fs::create_dir_all(&self.dir)
            .map_err(|source| InfrastructureError::FileWrite { path: self.dir.clone(), source })?;
        write_file(&self.dir.join(name), contents)
    }
}

/// Writes every document to one fixed path, ignoring the suggested name.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for FileSink {
    fn deliver(&self, _name: &str, contents: &[u8]) -> Result<Delivered> {
        write_file(&self.path, contents)
    }
}

/// Prints documents to standard output, terminated by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DocumentSink for StdoutSink {
    fn deliver(&self, _name: &str, contents: &[u8]) -> Result<Delivered> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_terminated(&mut lock, contents)?;
        lock.flush()?;
        Ok(Delivered { location: "<stdout>".to_string(), bytes: contents.len() })
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<Delivered> {
    FileWriter::atomic_write(path, contents)
        .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(Delivered { location: path.display().to_string(), bytes: contents.len() })
}

fn write_terminated(out: &mut impl Write, contents: &[u8]) -> std::io::Result<()> {
    out.write_all(contents)?;
    if !contents.is_empty() && !contents.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    Ok(())
}
