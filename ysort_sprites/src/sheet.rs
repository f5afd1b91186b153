use std::path::Path;

use crate::error::{Error, Result};

pub const DEFAULT_SHEET: &str = "sprites.png";

/// A decoded sprite sheet, ready to be uploaded as an ARGB8888 texture.
pub struct SheetImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>, // ARGB u32 per pixel, native byte order
}

impl SheetImage {
    /// Decodes any format the `image` crate understands (PNG, JPG, ...).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| Error::Texture {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let pixels = img
            .pixels()
            .flat_map(|p| {
                let [r, g, b, a] = p.0;
                let argb = ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32);
                argb.to_ne_bytes()
            })
            .collect();

        log::debug!("decoded sprite sheet {} ({width}x{height})", path.display());
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }
}
