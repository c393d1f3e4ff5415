// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Helper utilities for writing export documents.
pub struct FileWriter;

impl FileWriter {
    /// Write `data` to `path` through a sibling temp file and a rename, so a
    /// reader never observes a half-written document.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let tmp = temp_sibling(path)?;

        let result = write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Some(dir) = path.parent().and_then(|p| File::open(non_empty(p)).ok()) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

fn write_synced(tmp: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(tmp)?);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    Ok(())
}

/// `.<file name>.<pid>.tmp` next to the target.
fn temp_sibling(path: &Path) -> std::io::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other(format!("'{}' has no file name", path.display())))?;
    let tmp_name = format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id());
    Ok(path.with_file_name(tmp_name))
}

// `Path::new("a.txt").parent()` is `Some("")`.
#[cfg_attr(not(unix), allow(dead_code))]
fn non_empty(dir: &Path) -> &Path {
    if dir.as_os_str().is_empty() { Path::new(".") } else { dir }
}
