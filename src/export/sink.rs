//! Filesystem sink
//!
//! Writes export artifacts under the configured root, creating folders
//! on demand. Write failures are fatal for the affected document only.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{ExportError, ExportResult};

/// Writes files into the export tree
#[derive(Debug)]
pub struct ExportSink {
    root: PathBuf,
}

impl ExportSink {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Write one file into `folder` (relative to the root), creating the
    /// folder hierarchy as needed. Returns the full path written.
    pub fn write(&self, folder: &Path, file_name: &str, data: &[u8]) -> ExportResult<PathBuf> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).map_err(|e| ExportError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let path = dir.join(file_name);
        fs::write(&path, data).map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_nested_folders() {
        let temp = TempDir::new().unwrap();
        let sink = ExportSink::new(temp.path().to_path_buf());

        let path = sink
            .write(
                Path::new("archief 12 - Financieel/2023/4/INV-001"),
                "INV-001.json",
                b"{}",
            )
            .unwrap();

        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let sink = ExportSink::new(temp.path().to_path_buf());

        sink.write(Path::new("a"), "f.bin", b"old").unwrap();
        let path = sink.write(Path::new("a"), "f.bin", b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }
}
