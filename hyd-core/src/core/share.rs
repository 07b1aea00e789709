//! Transient markdown files handed to an export target.

use crate::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A document written to a private temporary directory.
///
/// The file exists until [`cleanup`](Self::cleanup) is called or the value
/// is dropped.
#[derive(Debug)]
pub struct ShareFile {
    dir: TempDir,
    path: PathBuf,
}

impl ShareFile {
    /// Writes `markdown` to a fresh temporary directory as `filename`.
    pub fn write(filename: &str, markdown: &str) -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("hyd-export-").tempdir()?;
        let path = dir.path().join(filename);
        fs::write(&path, markdown)?;
        debug!("wrote transient export {}", path.display());
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        self.path.file_name().and_then(|f| f.to_str()).unwrap_or_default()
    }

    /// Copies the file into `dest_dir` and returns the new path.
    pub fn persist_to<P: AsRef<Path>>(&self, dest_dir: P) -> Result<PathBuf> {
        let dest_dir = dest_dir.as_ref();
        fs::create_dir_all(dest_dir)?;
        let dest = dest_dir.join(self.filename());
        fs::copy(&self.path, &dest)?;
        info!("exported {}", dest.display());
        Ok(dest)
    }

    /// Removes the transient file and its directory.
    pub fn cleanup(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_cleanup() {
        let share = ShareFile::write("2025-05-10-post.md", "---\ntitle: x\n").unwrap();
        let path = share.path().to_path_buf();
        assert_eq!(share.filename(), "2025-05-10-post.md");
        assert_eq!(fs::read_to_string(&path).unwrap(), "---\ntitle: x\n");
        share.cleanup().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let path = {
            let share = ShareFile::write("a.md", "a").unwrap();
            share.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_persist_to() {
        let out = TempDir::new().unwrap();
        let share = ShareFile::write("b.md", "body").unwrap();
        let dest = share.persist_to(out.path().join("exports")).unwrap();
        drop(share);
        assert_eq!(fs::read_to_string(dest).unwrap(), "body");
    }
}
