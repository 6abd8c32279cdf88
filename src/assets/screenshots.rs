//! Screenshot crops for the feature carousel.

use anyhow::{Context, Result, ensure};
use image::DynamicImage;
use image::imageops::FilterType;
use tracing::info;

use crate::config::{CropRect, ScreenshotJob};

use super::encode::{write_jpeg, write_webp};
use super::report::{file_size, format_kb};

fn check_extract(source: &DynamicImage, extract: &CropRect) -> Result<()> {
    ensure!(
        extract.width > 0 && extract.height > 0,
        "Extract area must not be empty"
    );
    let right = extract.left.checked_add(extract.width);
    let bottom = extract.top.checked_add(extract.height);
    ensure!(
        right.is_some_and(|r| r <= source.width()) && bottom.is_some_and(|b| b <= source.height()),
        "Extract area {}x{} at ({}, {}) lies outside the {}x{} source",
        extract.width,
        extract.height,
        extract.left,
        extract.top,
        source.width(),
        source.height()
    );
    Ok(())
}

/// Crop the job's rectangle and scale it to cover the target size.
pub fn render_screenshot(source: &DynamicImage, job: &ScreenshotJob) -> Result<DynamicImage> {
    check_extract(source, &job.extract)?;
    ensure!(
        job.resize.width > 0 && job.resize.height > 0,
        "Target size must not be empty"
    );

    let CropRect {
        left,
        top,
        width,
        height,
    } = job.extract;
    let cropped = source.crop_imm(left, top, width, height);
    Ok(cropped.resize_to_fill(job.resize.width, job.resize.height, FilterType::Lanczos3))
}

pub fn process_job(job: &ScreenshotJob) -> Result<()> {
    ensure!(
        (1..=100).contains(&job.jpeg_quality),
        "JPEG quality {} for {} is outside 1-100",
        job.jpeg_quality,
        job.name
    );

    let input_size = file_size(&job.input)?;
    let source = image::open(&job.input)
        .with_context(|| format!("Failed to decode screenshot {:?}", job.input))?;

    let rendered = render_screenshot(&source, job)
        .with_context(|| format!("Failed to process {}", job.name))?;

    write_webp(&rendered.to_rgba8(), &job.output_webp)?;
    write_jpeg(&rendered.to_rgb8(), job.jpeg_quality, &job.output_jpeg)?;

    info!(
        "[OK] {}: {} ({})",
        job.name,
        job.input.display(),
        format_kb(input_size)
    );
    info!(
        "     -> {} ({})",
        job.output_webp.display(),
        format_kb(file_size(&job.output_webp)?)
    );
    info!(
        "     -> {} ({})",
        job.output_jpeg.display(),
        format_kb(file_size(&job.output_jpeg)?)
    );
    Ok(())
}

/// Run every job in order, stopping at the first failure.
pub fn process_screenshots(jobs: &[ScreenshotJob]) -> Result<()> {
    for job in jobs {
        process_job(job)?;
    }
    Ok(())
}
