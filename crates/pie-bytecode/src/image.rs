//! The `pie!` container format
//!
//! A compiled Pie program ships as a single binary container: a fixed
//! 20-byte header followed by opaque sections (code, string table) laid
//! out by the compiler. This module validates the header and exposes
//! read access to the buffer; it never interprets the sections themselves.

use crate::reader::{ByteReader, DecodeError};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Magic number for Pie bytecode containers: "pie!"
pub const MAGIC: [u8; 4] = *b"pie!";

/// Current container format version
pub const VERSION: u32 = 0;

/// Byte offsets of the fixed container header fields
pub mod layout {
    /// Offset of the 4-byte magic number
    pub const MAGIC: usize = 0;
    /// Offset of the format version (little-endian u32)
    pub const VERSION: usize = 4;
    /// Offset of the export count (reserved, not read by the loader)
    pub const EXPORT_COUNT: usize = 8;
    /// Offset of the export name reference (reserved, not read by the loader)
    pub const EXPORT_NAME: usize = 12;
    /// Offset of the entry-point offset (little-endian u32)
    pub const ENTRY_POINT: usize = 16;
    /// Total size of the fixed header
    pub const SIZE: usize = 20;
}

/// Container loading and reading errors
#[derive(Debug, Error)]
pub enum ImageError {
    /// IO error while acquiring the container bytes
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid magic number
    #[error("Invalid magic number: expected pie!, got {0:?}")]
    InvalidMagic([u8; 4]),

    /// Unsupported container version
    #[error("Unsupported version: {0} (current: {VERSION})")]
    UnsupportedVersion(u32),

    /// Decode error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A validated bytecode container
///
/// Owns the raw bytes of a compiled Pie program. Construction validates
/// the header magic and version; after that the buffer never changes, and
/// every read hands out a borrowed view into it. Reads past the header are
/// checked per call, so a header-valid but otherwise truncated container
/// constructs fine and reports errors only for the reads it cannot serve.
#[derive(Debug, Clone)]
pub struct BytecodeImage {
    data: Vec<u8>,
}

impl BytecodeImage {
    /// Validate a buffer as a bytecode container and take ownership of it
    ///
    /// Fails with [`ImageError::InvalidMagic`] or
    /// [`ImageError::UnsupportedVersion`] if the first 8 bytes are not the
    /// `pie!` magic followed by the supported version, and with a decode
    /// error if the buffer is too short to hold them.
    pub fn new(data: Vec<u8>) -> Result<Self, ImageError> {
        let mut reader = ByteReader::new(&data);

        let magic: [u8; 4] = reader.read_array()?;
        if magic != MAGIC {
            return Err(ImageError::InvalidMagic(magic));
        }

        let version = reader.read_u32()?;
        if version != VERSION {
            return Err(ImageError::UnsupportedVersion(version));
        }

        Ok(Self { data })
    }

    /// Read a container from any byte source
    ///
    /// Drains the source to its end into a fresh buffer, then validates it
    /// like [`BytecodeImage::new`].
    pub fn from_reader(mut reader: impl Read) -> Result<Self, ImageError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::new(data)
    }

    /// Load a container from a file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let data = std::fs::read(path)?;
        Self::new(data)
    }

    /// Raw bytes of the container, header included
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Total size of the container in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty (never true for a validated image)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset of the program entry point
    ///
    /// Decodes the little-endian u32 at byte 16 on every call; a container
    /// shorter than the fixed header fails with
    /// [`DecodeError::UnexpectedEnd`]. The value is returned as stored,
    /// without checking that it points inside the container.
    pub fn entry_offset(&self) -> Result<u32, ImageError> {
        let mut reader = ByteReader::new(&self.data);
        reader.seek(layout::ENTRY_POINT);
        Ok(reader.read_u32()?)
    }

    /// Read the NUL-terminated UTF-8 string at a byte offset
    ///
    /// The returned slice borrows from the container and excludes the
    /// terminator; a zero byte at `offset` itself yields `""`. An offset
    /// outside the container, a scan that reaches the end without finding
    /// a terminator, or invalid UTF-8 fail with the matching decode error.
    /// A failed read does not invalidate the image; later reads behave as
    /// if it never happened.
    pub fn read_string(&self, offset: u32) -> Result<&str, ImageError> {
        let mut reader = ByteReader::new(&self.data);
        reader.seek(offset as usize);
        Ok(reader.read_cstr()?)
    }
}
