//! Error and result types for NCGR/NCLR decoding.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NitroError>;

/// Every way a conversion can fail. Conversion is all-or-nothing, so none of
/// these carry partial output.
#[derive(Debug, Error)]
pub enum NitroError {
    /// A conversion was attempted before both sources were supplied
    #[error("No {input} file set")]
    MissingInput { input: &'static str },

    /// The buffer is shorter than the header region or the declared payload
    #[error("Truncated input reading {field}: need {required} bytes, got {actual}")]
    TruncatedInput {
        field: &'static str,
        required: usize,
        actual: usize,
    },

    /// A byte-reversed field must span whole byte pairs
    #[error("Invalid field length {len} at offset {offset:#x}: must be even")]
    InvalidFieldLength { offset: usize, len: usize },

    #[error("Unsupported colour depth {value}: only 4 bits per pixel is supported")]
    UnsupportedColorDepth { value: u32 },

    #[error("Geometry mismatch in {field}: {detail}")]
    GeometryMismatch { field: &'static str, detail: String },

    #[error("Palette index {index} at pixel ({x}, {y}) is out of range (palette has {len} colours)")]
    PaletteIndexOutOfRange {
        index: u8,
        x: usize,
        y: usize,
        len: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
