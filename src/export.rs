//! PNG output and the JSON metadata written next to it.

use std::{fs, io, path::Path};

use image::{ImageError, ImageFormat};
use serde::Serialize;
use thiserror::Error;

use crate::converter::Conversion;
use crate::error::NitroError;
use crate::formats::Rgb;
use crate::graphics::PixelGrid;

/// Output options
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Recompress with oxipng, reducing bit depth where possible
    pub optimise: bool,
    /// Composite transparency onto this colour and write an RGB PNG
    pub background: Option<Rgb>,
    pub write_metadata: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SpriteMetadata {
    pub width: usize,
    pub height: usize,
    pub chunk_size: usize,
    pub tile_count: usize,
    pub palette_colours: usize,
    pub transparent_pixels: usize,
    pub pixel_hash: String,
}

impl SpriteMetadata {
    pub fn from_conversion(conversion: &Conversion) -> Self {
        SpriteMetadata {
            width: conversion.grid.width(),
            height: conversion.grid.height(),
            chunk_size: conversion.header.chunk_size,
            tile_count: conversion.header.tile_count,
            palette_colours: conversion.palette.len(),
            transparent_pixels: conversion.grid.transparent_count(),
            pixel_hash: format!("{:016x}", conversion.grid.content_hash()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Nitro(#[from] NitroError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PNG optimisation failed: {0}")]
    Optimise(String),
}

/// Encode the grid as a PNG at `path`, whatever its extension.
pub fn save_png(grid: &PixelGrid, path: &Path, config: &ExportConfig) -> Result<(), ExportError> {
    if !config.optimise {
        return write_image(grid, path, config);
    }

    let temp_path = path.with_extension("temp.png");
    write_image(grid, &temp_path, config)?;

    let mut options = oxipng::Options::from_preset(2);
    options.bit_depth_reduction = true;

    let result = oxipng::optimize(
        &oxipng::InFile::Path(temp_path.to_path_buf()),
        &oxipng::OutFile::Path(Some(path.to_path_buf())),
        &options,
    );

    if let Err(e) = fs::remove_file(&temp_path) {
        println!("  Warning: Failed to remove temporary file: {}", e);
    }

    result.map_err(|e| ExportError::Optimise(e.to_string()))
}

fn write_image(grid: &PixelGrid, path: &Path, config: &ExportConfig) -> Result<(), ExportError> {
    match config.background {
        Some(background) => grid.flatten(background).save_with_format(path, ImageFormat::Png)?,
        None => grid.to_rgba_image().save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}

/// Write the PNG and, if configured, `<path>.json` alongside it.
pub fn export(conversion: &Conversion, path: &Path, config: &ExportConfig) -> Result<(), ExportError> {
    save_png(&conversion.grid, path, config)?;

    if config.write_metadata {
        let metadata = SpriteMetadata::from_conversion(conversion);
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(path.with_extension("json"), json)?;
    }

    Ok(())
}
