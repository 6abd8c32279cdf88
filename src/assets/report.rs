use anyhow::{Context, Result};
use std::path::Path;

pub fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

pub fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {:?}", path))?
        .len())
}

/// `path (WxH, N KB)`, read back from the file on disk.
pub fn describe_image(path: &Path) -> Result<String> {
    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("Failed to read back {:?}", path))?;
    Ok(format!(
        "{} ({}x{}, {})",
        path.display(),
        width,
        height,
        format_kb(file_size(path)?)
    ))
}
