//! Tile decoding and canvas composition for NCGR graphics.

pub mod compositor;
pub mod pixel_grid;
pub mod tiles;

pub use compositor::render;
pub use pixel_grid::{Pixel, PixelGrid};
pub use tiles::{decode_chunks, Chunk};
