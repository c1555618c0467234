//! Magic scanning over a raw container buffer
//!
//! Uses memchr for SIMD-accelerated pattern searching.

use memchr::memmem;

use crate::BRRES_MAGIC;

/// Find every non-overlapping occurrence of `needle` in `data`
///
/// After a match at `i` the search resumes at `i + needle.len()`, so a
/// self-overlapping needle never reports two matches that share bytes.
/// Offsets are returned in ascending order.
///
/// # Panics
/// Panics if `needle` is empty.
pub fn find_all(data: &[u8], needle: &[u8]) -> Vec<usize> {
    assert!(!needle.is_empty(), "search needle must not be empty");

    let finder = memmem::Finder::new(needle);
    let mut offsets = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= data.len() {
        let Some(found) = finder.find(&data[pos..]) else {
            break;
        };
        let offset = pos + found;
        offsets.push(offset);
        pos = offset + needle.len();
    }

    offsets
}

/// Find every BRRES magic in `data`
pub fn find_magic(data: &[u8]) -> Vec<usize> {
    find_all(data, &BRRES_MAGIC)
}
