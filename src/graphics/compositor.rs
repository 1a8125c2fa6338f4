//! Lays decoded chunks out on the canvas and resolves them through a palette.

use tracing::debug;

use crate::error::{NitroError, Result};
use crate::formats::{NcgrHeader, Palette};
use crate::graphics::pixel_grid::{Pixel, PixelGrid};
use crate::graphics::tiles::decode_chunks;

/// Render a tile payload with its palette. Chunks are placed in row-major
/// order; index 0 is transparent whatever the palette holds.
pub fn render(header: &NcgrHeader, payload: &[u8], palette: &Palette) -> Result<PixelGrid> {
    let geometry = header.geometry()?;
    let chunks = decode_chunks(header, payload)?;

    if chunks.len() != geometry.cols * geometry.rows {
        return Err(NitroError::GeometryMismatch {
            field: "tileDataByteLength",
            detail: format!(
                "{} chunks cannot fill a {}x{} grid",
                chunks.len(),
                geometry.cols,
                geometry.rows
            ),
        });
    }

    debug!(
        width = geometry.width,
        height = geometry.height,
        chunks = chunks.len(),
        "compositing"
    );

    let cs = header.chunk_size;
    let mut pixels = vec![Pixel::Transparent; geometry.width * geometry.height];

    for (i, chunk) in chunks.iter().enumerate() {
        let base_x = (i % geometry.cols) * cs;
        let base_y = (i / geometry.cols) * cs;

        for (ly, row) in chunk.rows().enumerate() {
            for (lx, &index) in row.iter().enumerate() {
                if index == 0 {
                    continue;
                }

                let x = base_x + lx;
                let y = base_y + ly;
                let colour = palette
                    .get(index as usize)
                    .ok_or(NitroError::PaletteIndexOutOfRange {
                        index,
                        x,
                        y,
                        len: palette.len(),
                    })?;

                pixels[y * geometry.width + x] = Pixel::Opaque(colour);
            }
        }
    }

    Ok(PixelGrid::from_pixels(geometry.width, geometry.height, pixels))
}
