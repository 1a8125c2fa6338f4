//! 4bpp tile decoding.
//!
//! Each payload byte holds two colour indices with the nibbles stored in
//! reverse of reading order. After the swap the high nibble is the left pixel.

use tracing::trace;

use crate::binary_utils::swap_nibbles;
use crate::error::{NitroError, Result};
use crate::formats::NcgrHeader;

/// A square block of palette indices (0-15), row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    size: usize,
    indices: Vec<u8>,
}

impl Chunk {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Palette index at local position `(x, y)`
    pub fn index_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.indices[y * self.size + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks_exact(self.size)
    }
}

/// Flatten a 4bpp payload into one index per pixel, in reading order.
pub fn unpack_indices(payload: &[u8]) -> Vec<u8> {
    let mut indices = Vec::with_capacity(payload.len() * 2);
    for &byte in payload {
        let corrected = swap_nibbles(byte);
        indices.push(corrected >> 4);
        indices.push(corrected & 0x0F);
    }
    indices
}

/// Split the payload into `chunk_size`² blocks in storage order.
pub fn decode_chunks(header: &NcgrHeader, payload: &[u8]) -> Result<Vec<Chunk>> {
    let size = header.chunk_size;
    let area = size * size;
    if area == 0 {
        return Err(NitroError::GeometryMismatch {
            field: "chunkSize",
            detail: "chunk size is zero".to_string(),
        });
    }

    let indices = unpack_indices(payload);
    if indices.len() % area != 0 {
        return Err(NitroError::GeometryMismatch {
            field: "tileDataByteLength",
            detail: format!(
                "{} indices do not divide into chunks of {}",
                indices.len(),
                area
            ),
        });
    }

    let chunks: Vec<Chunk> = indices
        .chunks_exact(area)
        .map(|block| Chunk {
            size,
            indices: block.to_vec(),
        })
        .collect();

    trace!(count = chunks.len(), size, "decoded chunks");
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::load_tile_source;
    use crate::test_fixtures::{build_ncgr, pack_indices};

    #[test]
    fn low_nibble_is_the_left_pixel() {
        assert_eq!(unpack_indices(&[0x21, 0xF0]), vec![1, 2, 0, 15]);
    }

    #[test]
    fn chunk_count_follows_payload_length() {
        let data = build_ncgr(2, 4, &[0; 64]);
        let source = load_tile_source(&data).unwrap();
        let chunks = decode_chunks(&source.header, source.payload).unwrap();

        assert_eq!(chunks.len(), 64 * 2 / 64);
        assert!(chunks.iter().all(|c| c.size() == 8));
    }

    #[test]
    fn chunks_are_row_major() {
        let indices: Vec<u8> = (0..64).map(|i| (i / 8) as u8).collect();
        let data = build_ncgr(1, 4, &pack_indices(&indices));
        let source = load_tile_source(&data).unwrap();
        let chunks = decode_chunks(&source.header, source.payload).unwrap();

        let chunk = &chunks[0];
        for (y, row) in chunk.rows().enumerate() {
            assert!(row.iter().all(|&i| i as usize == y));
        }
        assert_eq!(chunk.index_at(5, 3), Some(3));
        assert_eq!(chunk.index_at(7, 7), Some(7));
        assert_eq!(chunk.index_at(8, 0), None);
        assert_eq!(chunk.index_at(0, 8), None);
    }

    #[test]
    fn partial_chunk_is_a_geometry_mismatch() {
        let data = build_ncgr(1, 4, &[0; 33]);
        let source = load_tile_source(&data).unwrap();
        assert!(matches!(
            decode_chunks(&source.header, source.payload),
            Err(NitroError::GeometryMismatch {
                field: "tileDataByteLength",
                ..
            })
        ));
    }
}
