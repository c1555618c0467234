//! Output naming and file writing

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::category::Categories;
use crate::{Error, Result, OUTPUT_EXTENSION};

/// File name for the chunk at `index`: `output_<index>.brres`
pub fn file_name(index: usize) -> String {
    format!("output_{index}.{OUTPUT_EXTENSION}")
}

/// Every path a chunk is written to
///
/// With no categories the chunk goes to the top of `output_dir`; otherwise
/// one copy lands in each category folder and none at the top level.
pub fn destinations(output_dir: &Path, index: usize, categories: &Categories) -> Vec<PathBuf> {
    let name = file_name(index);

    if categories.is_empty() {
        return vec![output_dir.join(name)];
    }

    categories
        .iter()
        .map(|category| output_dir.join(category.name()).join(&name))
        .collect()
}

/// Lazily creates output directories, touching each one at most once
#[derive(Debug, Default)]
pub struct DirCache {
    created: HashSet<PathBuf>,
}

impl DirCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `dir` exists
    pub fn ensure(&mut self, dir: &Path) -> Result<()> {
        if self.created.contains(dir) {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|source| Error::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;

        self.created.insert(dir.to_path_buf());
        Ok(())
    }
}

/// Write `bytes` to `path`, creating its parent directory first
///
/// Existing files are truncated. The handle is closed before returning.
pub fn write_file(dirs: &mut DirCache, path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        dirs.ensure(parent)?;
    }

    let to_error = |source: std::io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(bytes).map_err(to_error)?;
    file.flush().map_err(to_error)
}
