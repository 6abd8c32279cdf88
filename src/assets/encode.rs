//! Encoders for the generated files.
//!
//! Everything is encoded into memory first so a codec failure never leaves
//! a half-written asset behind.

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {:?}", path))
}

fn encode_png(
    buf: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
    path: &Path,
) -> Result<()> {
    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, PngFilter::Adaptive)
        .write_image(buf, width, height, color)
        .with_context(|| format!("PNG encoding failed for {:?}", path))?;
    write_bytes(path, &bytes)
}

/// Write an RGBA image as a maximally compressed PNG.
pub fn write_png_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    encode_png(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
        path,
    )
}

/// Write a single-channel image as a maximally compressed greyscale PNG.
pub fn write_png_luma(image: &GrayImage, path: &Path) -> Result<()> {
    encode_png(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::L8,
        path,
    )
}

/// Write a lossless WebP.
pub fn write_webp(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    WebPEncoder::new_lossless(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("WebP encoding failed for {:?}", path))?;
    write_bytes(path, &bytes)
}

pub fn write_jpeg(image: &RgbImage, quality: u8, path: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .with_context(|| format!("JPEG encoding failed for {:?}", path))?;
    write_bytes(path, &bytes)
}
