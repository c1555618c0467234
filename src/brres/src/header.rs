//! BRRES fixed header decoding
//!
//! Only the fields needed to recover an archive's extent are read; the
//! section tree behind the header is never touched.

use byteorder::{ByteOrder, BE};

use crate::{Error, Result, BRRES_MAGIC};

/// Header size in bytes
pub const HEADER_SIZE: usize = 16;

// Field offsets
const BOM_OFFSET: usize = 4;
const VERSION_OFFSET: usize = 6;
const LENGTH_OFFSET: usize = 8;

/// Byte-order mark of a big-endian archive
pub const BOM_BIG_ENDIAN: u16 = 0xFEFF;

/// Byte-order mark of a little-endian archive (read big-endian)
pub const BOM_LITTLE_ENDIAN: u16 = 0xFFFE;

/// Archive byte order as announced by the BOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
    Unknown,
}

/// BRRES fixed header (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Raw byte-order mark, read big-endian
    pub bom: u16,
    /// Format version (not interpreted)
    pub version: u16,
    /// Declared total archive length, header included
    pub length: u32,
}

impl Header {
    /// Parse the header directly from a slice starting at the magic
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::DataTooShort {
                needed: HEADER_SIZE,
                actual: data.len(),
            });
        }

        if data[..4] != BRRES_MAGIC {
            return Err(Error::InvalidMagic([data[0], data[1], data[2], data[3]]));
        }

        Ok(Self {
            bom: BE::read_u16(&data[BOM_OFFSET..]),
            version: BE::read_u16(&data[VERSION_OFFSET..]),
            length: BE::read_u32(&data[LENGTH_OFFSET..]),
        })
    }

    #[inline]
    pub fn endian(&self) -> Endian {
        match self.bom {
            BOM_BIG_ENDIAN => Endian::Big,
            BOM_LITTLE_ENDIAN => Endian::Little,
            _ => Endian::Unknown,
        }
    }

    /// Declared length, if it can be relied on
    ///
    /// Only big-endian archives are trusted. A little-endian BOM is
    /// recognized but its length field is treated as unknown, as is a length
    /// shorter than the header itself or one that is negative when read as a
    /// signed 32-bit value.
    pub fn trusted_length(&self) -> Option<u32> {
        if self.endian() != Endian::Big {
            return None;
        }
        if (self.length as usize) < HEADER_SIZE || (self.length as i32) < 0 {
            return None;
        }
        Some(self.length)
    }
}

/// Decode the header at `base` and return the trusted declared length
///
/// The caller guarantees the magic sits at `base`. Returns `None` ("length
/// unknown") when the header does not fit in `data` or its length field
/// cannot be trusted.
pub fn decode_header(data: &[u8], base: usize) -> Option<u32> {
    let end = base.checked_add(HEADER_SIZE)?;
    let header = Header::from_bytes(data.get(base..end)?).ok()?;
    header.trusted_length()
}
