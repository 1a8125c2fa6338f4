//! Decode Nintendo DS NCGR tile graphics with their NCLR palettes into pixel
//! grids ready for an image encoder.

pub mod binary_utils;
pub mod converter;
pub mod error;
pub mod export;
pub mod formats;
pub mod graphics;

#[cfg(test)]
mod test_fixtures;

pub use converter::{convert, Conversion, Converter};
pub use error::{NitroError, Result};
pub use formats::{load_palette, load_tile_source, NcgrHeader, Palette, Rgb, TileSource};
pub use graphics::{render, Pixel, PixelGrid};
