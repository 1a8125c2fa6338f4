//! Hand-built NCGR/NCLR buffers for unit tests.

use crate::formats::ncgr::{
    CHUNK_SIZE_OFFSET, COLOR_DEPTH_OFFSET, TILE_COUNT_OFFSET, TILE_DATA_OFFSET,
    TILE_DATA_SIZE_OFFSET,
};
use crate::formats::nclr::{PALETTE_DATA_OFFSET, PALETTE_SIZE_OFFSET};

/// NCGR with 8px chunks, the given tile count, raw colour depth and payload.
pub fn build_ncgr(tile_count: u16, color_depth: u32, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; TILE_DATA_OFFSET];
    data[..4].copy_from_slice(b"RGCN");
    data[CHUNK_SIZE_OFFSET] = 0x10;
    data[TILE_COUNT_OFFSET..TILE_COUNT_OFFSET + 2].copy_from_slice(&tile_count.to_le_bytes());
    data[COLOR_DEPTH_OFFSET..COLOR_DEPTH_OFFSET + 4].copy_from_slice(&color_depth.to_le_bytes());
    data[TILE_DATA_SIZE_OFFSET..TILE_DATA_SIZE_OFFSET + 4]
        .copy_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(payload);
    data
}

/// NCLR holding the given BGR555 colours.
pub fn build_nclr(colours: &[u16]) -> Vec<u8> {
    let mut data = vec![0u8; PALETTE_DATA_OFFSET];
    data[..4].copy_from_slice(b"RLCN");
    data[PALETTE_SIZE_OFFSET..PALETTE_SIZE_OFFSET + 4]
        .copy_from_slice(&((colours.len() * 2) as u32).to_le_bytes());
    for colour in colours {
        data.extend_from_slice(&colour.to_le_bytes());
    }
    data
}

/// Pack pixel indices in reading order into storage bytes (low nibble first).
pub fn pack_indices(indices: &[u8]) -> Vec<u8> {
    indices
        .chunks(2)
        .map(|pair| (pair[0] & 0x0F) | (pair.get(1).copied().unwrap_or(0) << 4))
        .collect()
}
