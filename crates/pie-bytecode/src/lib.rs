//! Pie VM Bytecode Container
//!
//! This crate provides the compiled container format for the Pie virtual
//! machine: header validation, entry-point lookup, and bounded reads over
//! the raw bytes the compiler emitted.
//!
//! # Usage
//!
//! ```
//! use pie_bytecode::{BytecodeImage, MAGIC, VERSION};
//!
//! let mut bytes = Vec::new();
//! bytes.extend_from_slice(&MAGIC);
//! bytes.extend_from_slice(&VERSION.to_le_bytes());
//! bytes.extend_from_slice(&[0; 8]); // reserved export fields
//! bytes.extend_from_slice(&20u32.to_le_bytes()); // entry point
//! bytes.extend_from_slice(b"main\0");
//!
//! let image = BytecodeImage::new(bytes)?;
//! assert_eq!(image.entry_offset()?, 20);
//! assert_eq!(image.read_string(20)?, "main");
//! # Ok::<(), pie_bytecode::ImageError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod image;
pub mod reader;

pub use image::{layout, BytecodeImage, ImageError, MAGIC, VERSION};
pub use reader::{ByteReader, DecodeError};
