//! Container loading
//!
//! The whole container is held in memory (or mapped) for the duration of a
//! command; the library only ever borrows it as a byte slice.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::Path;

/// Container bytes, either read into memory or memory-mapped
pub enum Container {
    Loaded(Vec<u8>),
    Mapped(Mmap),
}

impl Container {
    /// Read the whole file into memory
    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read input {}", path.display()))?;
        Ok(Container::Loaded(data))
    }

    /// Memory-map the file read-only
    pub fn map(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input {}", path.display()))?;

        // Empty files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(Container::Loaded(Vec::new()));
        }

        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to mmap input {}", path.display()))?;
        Ok(Container::Mapped(mmap))
    }

    pub fn open(path: &Path, mmap: bool) -> Result<Self> {
        let container = if mmap { Self::map(path)? } else { Self::read(path)? };
        tracing::debug!(
            path = %path.display(),
            size = container.len(),
            mapped = mmap,
            "loaded container"
        );
        Ok(container)
    }
}

impl Deref for Container {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Container::Loaded(data) => data,
            Container::Mapped(mmap) => mmap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_map_agree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("container.bin");
        fs::write(&path, b"..bres..").unwrap();

        let loaded = Container::open(&path, false).unwrap();
        let mapped = Container::open(&path, true).unwrap();
        assert_eq!(&*loaded, &*mapped);
        assert_eq!(&*loaded, b"..bres..");
    }

    #[test]
    fn test_map_empty_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        assert!(Container::open(&path, true).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(Container::open(&temp_dir.path().join("nope"), false).is_err());
        assert!(Container::open(&temp_dir.path().join("nope"), true).is_err());
    }
}
