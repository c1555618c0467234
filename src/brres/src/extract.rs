//! Container extraction
//!
//! Loads the whole container once, resolves the embedded archives and
//! writes each one out. Write failures do not stop the run: every failure
//! is collected into the [`ExtractReport`] so the caller can surface them
//! after the remaining chunks have been written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::category::{Categories, Classifier};
use crate::chunk::{resolve, Chunk};
use crate::header::decode_header;
use crate::output::{destinations, write_file, DirCache};
use crate::scan::find_magic;
use crate::{Error, Result};

/// Where a chunk's length came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthSource {
    /// Trusted length field in the header
    Declared,
    /// Distance to the next magic or end of data
    Fallback,
}

/// One entry of the output plan
#[derive(Debug, Clone, Serialize)]
pub struct PlannedChunk {
    /// Dense index used in the output file name
    pub index: usize,
    #[serde(flatten)]
    pub chunk: Chunk,
    pub length_source: LengthSource,
    /// Matched categories (always empty when not organizing)
    pub categories: Categories,
}

/// A file or directory that could not be written
#[derive(Debug)]
pub struct WriteFailure {
    pub index: usize,
    pub error: Error,
}

/// Outcome of an extraction run
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Number of magics found, degenerate ones included
    pub magics: usize,
    /// Number of archives resolved from those magics
    pub chunks: usize,
    /// Files written, in chunk order
    pub written: Vec<PathBuf>,
    /// Writes that failed
    pub failures: Vec<WriteFailure>,
}

impl ExtractReport {
    /// True when every planned file was written
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the output plan for `data` without touching the filesystem
pub fn plan(data: &[u8], organize: bool) -> Vec<PlannedChunk> {
    plan_offsets(data, &find_magic(data), organize)
}

fn plan_offsets(data: &[u8], offsets: &[usize], organize: bool) -> Vec<PlannedChunk> {
    if offsets.is_empty() {
        return Vec::new();
    }
    tracing::debug!(count = offsets.len(), "found BRRES magics");

    let classifier = organize.then(Classifier::new);

    resolve(data, offsets)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let length_source = match decode_header(data, chunk.start) {
                Some(declared) if declared as usize == chunk.length => LengthSource::Declared,
                _ => LengthSource::Fallback,
            };
            let categories = classifier
                .as_ref()
                .map(|c| c.classify(data, &chunk))
                .unwrap_or_default();

            PlannedChunk {
                index,
                chunk,
                length_source,
                categories,
            }
        })
        .collect()
}

/// Split an in-memory container into `output_dir`
///
/// Directories are only created once a chunk needs them, so a container
/// without any archive leaves the filesystem untouched.
pub fn extract_bytes(data: &[u8], output_dir: &Path, organize: bool) -> ExtractReport {
    let offsets = find_magic(data);
    let planned = plan_offsets(data, &offsets, organize);
    let mut report = ExtractReport {
        magics: offsets.len(),
        chunks: planned.len(),
        ..Default::default()
    };

    if offsets.is_empty() {
        tracing::info!("no occurrences of BRRES magic found");
        return report;
    }
    if planned.is_empty() {
        tracing::info!(magics = report.magics, "every BRRES magic was degenerate");
        return report;
    }

    let mut dirs = DirCache::new();

    for entry in &planned {
        let bytes = entry.chunk.bytes(data);

        for path in destinations(output_dir, entry.index, &entry.categories) {
            match write_file(&mut dirs, &path, bytes) {
                Ok(()) => {
                    tracing::info!(
                        index = entry.index,
                        start = entry.chunk.start,
                        length = entry.chunk.length,
                        path = %path.display(),
                        "wrote archive"
                    );
                    report.written.push(path);
                }
                Err(error) => {
                    tracing::warn!(index = entry.index, %error, "failed to write archive");
                    report.failures.push(WriteFailure {
                        index: entry.index,
                        error,
                    });
                }
            }
        }
    }

    tracing::info!(
        archives = report.chunks,
        files = report.written.len(),
        failures = report.failures.len(),
        "extraction finished"
    );

    report
}

/// Read `input` and split it into `output_dir`
///
/// Only a failure to read the input is returned as an error; write
/// failures are collected in the report.
pub fn extract(input: &Path, output_dir: &Path, organize: bool) -> Result<ExtractReport> {
    let data = fs::read(input).map_err(|source| Error::InputRead {
        path: input.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %input.display(), size = data.len(), "loaded container");

    Ok(extract_bytes(&data, output_dir, organize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::header::BOM_BIG_ENDIAN;
    use crate::BRRES_MAGIC;

    fn make_archive(length: u32, body: &[u8]) -> Vec<u8> {
        let mut data = BRRES_MAGIC.to_vec();
        data.extend_from_slice(&BOM_BIG_ENDIAN.to_be_bytes());
        data.extend_from_slice(&[0, 0]);
        data.extend_from_slice(&length.to_be_bytes());
        data.extend_from_slice(&[0, 0, 0, 1]);
        data.extend_from_slice(body);
        data
    }

    #[test]
    fn test_plan_empty() {
        assert!(plan(b"", true).is_empty());
        assert!(plan(&[0u8; 64], false).is_empty());
    }

    #[test]
    fn test_plan_length_source() {
        let mut data = make_archive(16, &[]);
        let mut second = make_archive(0, &[0; 8]);
        data.append(&mut second);

        let planned = plan(&data, false);
        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].length_source, LengthSource::Declared);
        assert_eq!(planned[1].length_source, LengthSource::Fallback);
        assert_eq!(planned[1].chunk.length, 24);
    }

    #[test]
    fn test_plan_only_classifies_when_organizing() {
        let tagged = make_archive(30, b"Textures(NW4R)");
        assert!(plan(&tagged, false)[0].categories.is_empty());
        assert_eq!(
            plan(&tagged, true)[0].categories.iter().copied().collect::<Vec<_>>(),
            vec![Category::Textures]
        );
    }

    #[test]
    fn test_plan_indices_dense() {
        let mut data = vec![0xAB; 7];
        for _ in 0..5 {
            data.extend(make_archive(20, b"abcd"));
        }
        let indices: Vec<_> = plan(&data, false).iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_report_counts_degenerate_magics() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("out");

        let report = extract_bytes(b"bres", &out, false);
        assert_eq!(report.magics, 1);
        assert_eq!(report.chunks, 0);
        assert!(!out.exists());

        let report = extract_bytes(b"no magic", &out, false);
        assert_eq!(report.magics, 0);
        assert_eq!(report.chunks, 0);
    }

    #[test]
    fn test_extract_missing_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.bin");
        let err = extract(&missing, temp_dir.path(), false).unwrap_err();
        assert!(matches!(err, Error::InputRead { .. }));
    }

    #[test]
    fn test_write_failures_are_collected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("out");
        fs::write(&blocker, b"file where a directory should be").unwrap();

        let mut data = make_archive(16, &[]);
        data.extend(make_archive(16, &[]));

        let report = extract_bytes(&data, &blocker, false);
        assert_eq!(report.magics, 2);
        assert_eq!(report.chunks, 2);
        assert!(report.written.is_empty());
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[1].index, 1);
        assert!(!report.is_complete());
    }
}
