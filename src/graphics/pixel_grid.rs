//! Rendered output handed to an image encoder.

use std::hash::{Hash, Hasher};

use image::{Rgb as ImageRgb, RgbImage, Rgba, RgbaImage};
use twox_hash::XxHash64;

use crate::formats::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pixel {
    Transparent,
    Opaque(Rgb),
}

impl Pixel {
    pub fn to_rgba(self) -> Rgba<u8> {
        match self {
            Pixel::Transparent => Rgba([0, 0, 0, 0]),
            Pixel::Opaque(c) => Rgba([c.r, c.g, c.b, 255]),
        }
    }
}

/// A `width` x `height` grid of resolved pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        PixelGrid {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn transparent_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| matches!(p, Pixel::Transparent))
            .count()
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width as u32, self.height as u32);
        for (dst, src) in img.pixels_mut().zip(&self.pixels) {
            *dst = src.to_rgba();
        }
        img
    }

    /// Composite onto a solid background for encoders without alpha.
    pub fn flatten(&self, background: Rgb) -> RgbImage {
        let mut img = RgbImage::new(self.width as u32, self.height as u32);
        for (dst, src) in img.pixels_mut().zip(&self.pixels) {
            let c = match src {
                Pixel::Transparent => background,
                Pixel::Opaque(c) => *c,
            };
            *dst = ImageRgb([c.r, c.g, c.b]);
        }
        img
    }

    /// 64-bit digest of the RGBA buffer, used to spot identical sprites
    pub fn content_hash(&self) -> u64 {
        let mut hasher = XxHash64::default();
        self.to_rgba_image().as_raw().hash(&mut hasher);
        hasher.finish()
    }
}
