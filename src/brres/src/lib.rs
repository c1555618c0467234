//! Container BRRES splitter
//!
//! Some Wii-era data dumps pack many NW4R BRRES archives back to back into a
//! single file with no outer index. This crate finds each embedded archive,
//! recovers its length from the header and writes it out as a standalone
//! `.brres` file, optionally sorted into folders by the resource categories
//! it contains.
//!
//! # Format Overview
//!
//! ## BRRES fixed header (16 bytes, big-endian)
//! - Bytes 0-3: "bres" magic
//! - Bytes 4-5: Byte-order mark (`0xFEFF` = big-endian)
//! - Bytes 6-7: Version (ignored)
//! - Bytes 8-11: Total archive length, header included
//! - Bytes 12-15: Root offset / section count (ignored)
//!
//! ## Category tags
//! Archives carry ASCII folder tags such as `Textures(NW4R)` or
//! `AnmChr(NW4R)`; their presence anywhere in an archive's bytes marks it as
//! holding that kind of resource.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> brres::Result<()> {
//! let report = brres::extract("stage.bin".as_ref(), "out".as_ref(), true)?;
//! for path in &report.written {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod chunk;
pub mod extract;
pub mod header;
pub mod output;
pub mod scan;

pub use category::{classify, Categories, Category, Classifier};
pub use chunk::{resolve, Chunk};
pub use extract::{
    extract, extract_bytes, plan, ExtractReport, LengthSource, PlannedChunk, WriteFailure,
};
pub use header::{decode_header, Endian, Header};
pub use scan::{find_all, find_magic};

use std::path::PathBuf;

/// BRRES magic bytes ("bres")
pub const BRRES_MAGIC: [u8; 4] = *b"bres";

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = header::HEADER_SIZE;

/// Extension given to every extracted archive
pub const OUTPUT_EXTENSION: &str = "brres";

/// Errors from BRRES extraction
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read input {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid BRRES magic: expected 'bres', got {0:02x?}")]
    InvalidMagic([u8; 4]),

    #[error("Data too short: need {needed} bytes, got {actual}")]
    DataTooShort { needed: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check if data starts with the BRRES magic
pub fn is_brres(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == BRRES_MAGIC
}
