//! # Nitro Character Graphic Resource
//!
//! Holds 4bpp tile graphics: a small fixed header followed by packed colour
//! indices, two per byte.
//!
//! ```text
//! 0x00  generic header (magic, byte order, version, file size)
//! 0x0C  chunk size, stored as four nibble-wide binary digits
//! 0x10  character data block (magic, block size)
//! 0x18  tile count        (u16)
//! 0x1C  colour depth      (u32)
//! 0x28  tile data length  (u32)
//! 0x30  tile data
//! ```
//!
//! Magic and version fields are not checked.

use tracing::debug;

use crate::binary_utils::read_reversed;
use crate::error::{NitroError, Result};

pub const CHUNK_SIZE_OFFSET: usize = 0x0C;
pub const TILE_COUNT_OFFSET: usize = 0x18;
pub const COLOR_DEPTH_OFFSET: usize = 0x1C;
pub const TILE_DATA_SIZE_OFFSET: usize = 0x28;
pub const TILE_DATA_OFFSET: usize = 0x30;

/// Colour depth value as stored by the hardware texture format (GX 16-colour).
const COLOR_DEPTH_PLTT16: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorDepth {
    Bpp4,
}

impl ColorDepth {
    /// Accepts a literal bit count of 4 and also 3, the GX 16-colour texture
    /// format code that real 4bpp files store. Accepting 3 goes beyond a strict
    /// "4 bits per pixel only" reading on purpose; every other value is
    /// `UnsupportedColorDepth`.
    pub fn from_raw(value: u32) -> Result<Self> {
        match value {
            4 | COLOR_DEPTH_PLTT16 => Ok(ColorDepth::Bpp4),
            _ => Err(NitroError::UnsupportedColorDepth { value }),
        }
    }

    pub fn bits_per_pixel(self) -> usize {
        match self {
            ColorDepth::Bpp4 => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NcgrHeader {
    /// Tile edge length in pixels
    pub chunk_size: usize,
    pub color_depth: ColorDepth,
    pub tile_count: usize,
    pub tile_data_byte_length: usize,
}

/// Canvas dimensions derived from a header, in pixels and in chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    pub cols: usize,
    pub rows: usize,
}

impl NcgrHeader {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < TILE_DATA_OFFSET {
            return Err(NitroError::TruncatedInput {
                field: "NCGR header",
                required: TILE_DATA_OFFSET,
                actual: data.len(),
            });
        }

        let chunk_size = read_chunk_size(data);
        let tile_count = read_reversed(data, TILE_COUNT_OFFSET, 2, "tileCount")? as usize;
        let raw_depth = read_reversed(data, COLOR_DEPTH_OFFSET, 4, "colorDepth")?;
        let tile_data_byte_length =
            read_reversed(data, TILE_DATA_SIZE_OFFSET, 4, "tileDataByteLength")? as usize;

        debug!(
            chunk_size,
            tile_count, raw_depth, tile_data_byte_length, "parsed NCGR header"
        );

        Ok(NcgrHeader {
            chunk_size,
            color_depth: ColorDepth::from_raw(raw_depth)?,
            tile_count,
            tile_data_byte_length,
        })
    }

    /// Number of colour indices in the tile payload
    pub fn pixel_count(&self) -> usize {
        self.tile_data_byte_length * 8 / self.color_depth.bits_per_pixel()
    }

    /// Derive the canvas size. Tiles are stacked in a single column of
    /// `tile_count` chunks, so the width falls out of the payload length.
    pub fn geometry(&self) -> Result<Geometry> {
        let cs = self.chunk_size;
        if cs == 0 {
            return Err(NitroError::GeometryMismatch {
                field: "chunkSize",
                detail: "chunk size is zero".to_string(),
            });
        }
        if self.tile_count == 0 {
            return Err(NitroError::GeometryMismatch {
                field: "tileCount",
                detail: "tile count is zero".to_string(),
            });
        }

        let pixels = self.pixel_count();
        let height = self.tile_count * cs;
        if pixels % height != 0 {
            return Err(NitroError::GeometryMismatch {
                field: "tileDataByteLength",
                detail: format!("{} pixels do not fill rows of height {}", pixels, height),
            });
        }
        let width = pixels / height;

        if width % cs != 0 || height % cs != 0 {
            return Err(NitroError::GeometryMismatch {
                field: "chunkSize",
                detail: format!("{}x{} is not a multiple of {}", width, height, cs),
            });
        }
        if width * height != self.tile_count * cs * cs {
            return Err(NitroError::GeometryMismatch {
                field: "tileCount",
                detail: format!(
                    "{}x{} canvas does not match {} tiles of {}x{}",
                    width, height, self.tile_count, cs, cs
                ),
            });
        }

        Ok(Geometry {
            width,
            height,
            cols: width / cs,
            rows: height / cs,
        })
    }
}

/// Each nibble of the two-byte field holds one binary digit, read in storage
/// order; `10 00` is 0b1000. Nibbles other than 0 or 1 carry no digit.
fn read_chunk_size(data: &[u8]) -> usize {
    data[CHUNK_SIZE_OFFSET..CHUNK_SIZE_OFFSET + 2]
        .iter()
        .flat_map(|&byte| [byte >> 4, byte & 0x0F])
        .filter(|&nibble| nibble <= 1)
        .fold(0usize, |acc, bit| (acc << 1) | bit as usize)
}

/// A parsed NCGR file: its header plus a borrowed view of the tile payload.
#[derive(Clone, Copy, Debug)]
pub struct TileSource<'a> {
    pub header: NcgrHeader,
    pub payload: &'a [u8],
}

/// Parse the header and slice out the tile payload without copying it.
pub fn load_tile_source(data: &[u8]) -> Result<TileSource<'_>> {
    let header = NcgrHeader::from_bytes(data)?;

    let end = TILE_DATA_OFFSET + header.tile_data_byte_length;
    if data.len() < end {
        return Err(NitroError::TruncatedInput {
            field: "NCGR tile data",
            required: end,
            actual: data.len(),
        });
    }

    Ok(TileSource {
        header,
        payload: &data[TILE_DATA_OFFSET..end],
    })
}
