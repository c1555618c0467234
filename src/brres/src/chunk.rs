//! Chunk boundary resolution
//!
//! Each magic offset starts a chunk. Its length comes from the header when
//! the header is trustworthy and does not run into the next archive;
//! otherwise the chunk stops at the next magic (or end of data).

use serde::Serialize;

use crate::header::decode_header;
use crate::{is_brres, BRRES_MAGIC};

/// A contiguous byte range holding one embedded archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Absolute offset of the magic
    pub start: usize,
    /// Length in bytes
    pub length: usize,
}

impl Chunk {
    /// Offset one past the last byte
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Borrow this chunk's bytes out of the buffer it was resolved against
    #[inline]
    pub fn bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end()]
    }
}

/// Resolve magic offsets into non-overlapping chunks
///
/// `offsets` must be ascending, as produced by [`crate::find_magic`]. The
/// returned chunks keep that order. Chunks that are empty, run past the end
/// of `data`, or hold nothing but the magic itself are dropped.
pub fn resolve(data: &[u8], offsets: &[usize]) -> Vec<Chunk> {
    debug_assert!(
        offsets.windows(2).all(|w| w[0] < w[1]),
        "magic offsets must be strictly ascending"
    );
    debug_assert!(
        offsets.iter().all(|&o| data.get(o..).is_some_and(is_brres)),
        "every offset must point at a BRRES magic"
    );

    let ends = offsets.iter().skip(1).copied().chain(std::iter::once(data.len()));

    offsets
        .iter()
        .zip(ends)
        .filter_map(|(&start, next)| {
            let fallback = next.saturating_sub(start);
            let length = match decode_header(data, start) {
                Some(declared) if declared as usize <= fallback => declared as usize,
                Some(declared) => {
                    tracing::debug!(
                        start,
                        declared,
                        fallback,
                        "declared length overruns next archive, clamping"
                    );
                    fallback
                }
                None => {
                    tracing::debug!(start, fallback, "header length unknown, using fallback");
                    fallback
                }
            };

            let chunk = Chunk { start, length };
            if is_degenerate(data, &chunk) {
                tracing::debug!(start, length, "skipping degenerate chunk");
                return None;
            }
            Some(chunk)
        })
        .collect()
}

fn is_degenerate(data: &[u8], chunk: &Chunk) -> bool {
    chunk.length <= BRRES_MAGIC.len()
        || chunk
            .start
            .checked_add(chunk.length)
            .is_none_or(|end| end > data.len())
}
