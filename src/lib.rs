use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

pub mod badge;
pub mod draw;
pub mod manifest;
pub mod palette;
pub mod pictogram;

/// Canvas edge length in pixels (WeChat recommends 81x81 for tab bar icons).
pub const ICON_SIZE: u32 = 81;

/// Default output directory, relative to the working directory.
pub const DEFAULT_ICON_DIR: &str = "miniprogram/images";

/// Creates a fresh transparent canvas for one icon.
pub fn new_canvas() -> RgbaImage {
    RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba([255, 255, 255, 0]))
}

/// Creates the icon output directory (and any missing parents).
pub fn ensure_icon_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).context("Can't create output directory")
}

/// Encodes a canvas as PNG and writes it to `path`, overwriting any
/// existing file.
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ColorType::Rgba8)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    out.flush()?;
    Ok(())
}
