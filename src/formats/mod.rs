//! Parsers for the Nitro graphics resources found in the DS file system.

pub mod ncgr;
pub mod nclr;

pub use ncgr::{load_tile_source, ColorDepth, Geometry, NcgrHeader, TileSource};
pub use nclr::{load_palette, Palette, Rgb};
