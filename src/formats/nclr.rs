//! # Nitro Colour Resource
//!
//! Contains the colour definitions for the indices stored in NCGR tile data.
//! Colours are packed BGR555, two bytes each, after a fixed 0x28 byte header.
//! Only the first palette bank is read.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::binary_utils::read_reversed;
use crate::error::{NitroError, Result};

pub const PALETTE_SIZE_OFFSET: usize = 0x24;
pub const PALETTE_DATA_OFFSET: usize = 0x28;

const CHANNEL_MASK: u16 = 0x1F;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parses `RRGGBB`, with or without a leading `#`.
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Expected a colour as RRGGBB, got '{}'", s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("Invalid colour '{}': {}", s, e))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Rgb {
    /// Unpack a BGR555 colour: red in bits 0-4, green in 5-9, blue in 10-14.
    pub fn from_bgr555(value: u16) -> Self {
        Rgb {
            r: expand_channel((value & CHANNEL_MASK) as u8),
            g: expand_channel(((value >> 5) & CHANNEL_MASK) as u8),
            b: expand_channel(((value >> 10) & CHANNEL_MASK) as u8),
        }
    }
}

/// Expand a 5-bit channel to 8 bits. The scaled value gets a correction of a
/// 32nd of itself so that 31 lands on 255.
pub fn expand_channel(value: u8) -> u8 {
    let scaled = (value & CHANNEL_MASK as u8) as u16 * 8;
    (scaled + scaled / 32) as u8
}

/// Ordered colour table. Index 0 means transparent when rendering and its
/// stored colour is never drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Rgb>,
}

impl Palette {
    pub fn from_colours(colours: Vec<Rgb>) -> Self {
        Palette { colours }
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colours.get(index).copied()
    }
}

/// Parse an NCLR buffer into its colour table.
pub fn load_palette(data: &[u8]) -> Result<Palette> {
    if data.len() < PALETTE_DATA_OFFSET {
        return Err(NitroError::TruncatedInput {
            field: "NCLR header",
            required: PALETTE_DATA_OFFSET,
            actual: data.len(),
        });
    }

    let byte_length = read_reversed(data, PALETTE_SIZE_OFFSET, 4, "paletteByteLength")? as usize;
    let end = PALETTE_DATA_OFFSET + byte_length;
    if data.len() < end {
        return Err(NitroError::TruncatedInput {
            field: "NCLR palette data",
            required: end,
            actual: data.len(),
        });
    }

    let colours = (PALETTE_DATA_OFFSET..end - byte_length % 2)
        .step_by(2)
        .map(|offset| {
            read_reversed(data, offset, 2, "palette entry").map(|v| Rgb::from_bgr555(v as u16))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(byte_length, colours = colours.len(), "parsed NCLR palette");

    Ok(Palette { colours })
}
