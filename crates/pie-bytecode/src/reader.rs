//! Bounded reads over raw container bytes
//!
//! Every read checks the remaining length before touching the buffer, so a
//! truncated or corrupt container surfaces as an error instead of a panic.

use thiserror::Error;

/// Errors that can occur while reading container bytes
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Unexpected end of container data
    #[error("Unexpected end of container at offset {0}")]
    UnexpectedEnd(usize),

    /// String scan ran past the end of the buffer without a terminator
    #[error("Unterminated string at offset {0}")]
    UnterminatedString(usize),

    /// Invalid UTF-8 string
    #[error("Invalid UTF-8 string at offset {0}")]
    InvalidUtf8(usize),
}

/// Byte reader over a borrowed container buffer
///
/// Tracks an absolute position and hands out primitive values and string
/// slices. Reads never index past the end of the buffer; offsets reported
/// in errors are absolute positions into the buffer.
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of the buffer
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Get the current position in the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the number of bytes left between the position and the end
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Seek to a specific position
    ///
    /// Seeking out of range is not itself an error; the next read reports it.
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        if self.position >= self.buffer.len() {
            return Err(DecodeError::UnexpectedEnd(self.position));
        }
        let value = self.buffer[self.position];
        self.position += 1;
        Ok(value)
    }

    /// Read a 32-bit unsigned integer (little-endian)
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        if self.remaining() < 4 {
            return Err(DecodeError::UnexpectedEnd(self.position));
        }
        let bytes = [
            self.buffer[self.position],
            self.buffer[self.position + 1],
            self.buffer[self.position + 2],
            self.buffer[self.position + 3],
        ];
        self.position += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a fixed number of bytes by value
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        // N = 0 must still fail past the end of the buffer
        if self.position > self.buffer.len() || self.remaining() < N {
            return Err(DecodeError::UnexpectedEnd(self.position));
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[self.position..self.position + N]);
        self.position += N;
        Ok(bytes)
    }

    /// Read a NUL-terminated UTF-8 string
    ///
    /// Scans forward to the next zero byte, decodes everything before it,
    /// and consumes the terminator. The terminator is not part of the
    /// returned string; a zero byte at the current position yields `""`.
    /// The scan stops at the end of the buffer and reports
    /// [`DecodeError::UnterminatedString`] if no terminator was found.
    pub fn read_cstr(&mut self) -> Result<&'a str, DecodeError> {
        let start = self.position;
        loop {
            match self.buffer.get(self.position) {
                Some(0) => break,
                Some(_) => self.position += 1,
                None => return Err(DecodeError::UnterminatedString(start)),
            }
        }
        let bytes = &self.buffer[start..self.position];
        self.position += 1;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8(start))
    }
}
