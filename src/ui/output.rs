use std::path::Path;

use eframe::egui::ColorImage;
use image::{ImageFormat, RgbaImage};

use crate::error::OutputError;

/// Copy a screenshot into an `image` buffer.
pub fn to_rgba(image: &ColorImage) -> Result<RgbaImage, OutputError> {
    let [width, height] = image.size;
    let bytes: Vec<u8> = image.pixels.iter().flat_map(|p| p.to_array()).collect();
    RgbaImage::from_raw(width as u32, height as u32, bytes).ok_or(OutputError::BufferSize {
        width,
        height,
        len: image.pixels.len(),
    })
}

/// Write a screenshot to `path` as PNG.
pub fn save_png(image: &ColorImage, path: &Path) -> Result<(), OutputError> {
    to_rgba(image)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
