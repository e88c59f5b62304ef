// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module loads a raster image from disk and converts it to RGBA8
//! pixels suitable for an egui texture.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Load an image file, failing if it is missing or not a supported format.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::info!("Loaded image: {} ({}x{})", path.display(), width, height);

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let img = image::GrayImage::from_fn(50, 40, |x, _| image::Luma([(x * 5) as u8]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.width, 50);
        assert_eq!(loaded.height, 40);
        assert_eq!(loaded.pixels.len(), 50 * 40 * 4);
        // Gray expands to opaque RGBA.
        assert_eq!(&loaded.pixels[4..8], &[5, 5, 5, 255]);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = load_image(&path).unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn test_non_image_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "not an image").unwrap();

        assert!(load_image(&path).is_err());
    }
}
