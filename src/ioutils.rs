use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Byte-for-byte copy of `source_path` over `dest_path`.
///
/// Parent directories of the destination are created. Any failure is reported
/// as `CopyFailed` naming both the template file and the destination.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();
    let copy_failed = |source: std::io::Error| Error::CopyFailed {
        path: source_path.display().to_string(),
        target: dest_path.display().to_string(),
        source,
    };

    if !source_path.is_file() {
        return Err(copy_failed(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "template file does not exist",
        )));
    }
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(copy_failed)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(copy_failed)
}
