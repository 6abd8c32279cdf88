//! Runtime icon and depth map for the parallax logo.
//!
//! The icon art is exported with a soft, anti-aliased edge. After lossy
//! compression those semi-transparent pixels carry dark halo colors that
//! become visible once the depth shader displaces them, so their RGB is
//! pulled toward the opaque interior before the icon is written.

use anyhow::{Context, Result, ensure};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use tracing::info;

use crate::config::LogoConfig;
use crate::constants::{
    DEPTH_ALPHA_BLUR_SIGMA, DEPTH_ALPHA_FLOOR, DEPTH_ALPHA_RANGE, EDGE_ALPHA_THRESHOLD,
    EDGE_CLEANUP_ITERATIONS, FULL_BLEND_ALPHA, NEIGHBOR_MIN_ALPHA, NEUTRAL_DEPTH,
};

use super::encode::{write_png_luma, write_png_rgba};
use super::report::describe_image;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn clamp_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Fit `image` inside a `size`×`size` transparent canvas, centered.
pub fn contain(image: &DynamicImage, size: u32) -> RgbaImage {
    let fitted = image.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let mut canvas = RgbaImage::new(size, size);
    let x = size.saturating_sub(fitted.width()) / 2;
    let y = size.saturating_sub(fitted.height()) / 2;
    imageops::replace(&mut canvas, &fitted, x as i64, y as i64);
    canvas
}

/// How far a translucent pixel moves toward its neighbour average.
fn edge_blend_factor(alpha: u8) -> f32 {
    if alpha <= FULL_BLEND_ALPHA {
        1.0
    } else {
        f32::from(EDGE_ALPHA_THRESHOLD - alpha) / f32::from(EDGE_ALPHA_THRESHOLD - FULL_BLEND_ALPHA)
    }
}

/// Replace halo colors on translucent edge pixels.
///
/// Each pass reads only the previous pass's colors. Alpha is never touched.
pub fn clean_icon_edges(icon: &RgbaImage) -> RgbaImage {
    let (width, height) = icon.dimensions();
    let (w, h) = (width as usize, height as usize);

    let alpha: Vec<u8> = icon.pixels().map(|p| p[3]).collect();
    let mut rgb: Vec<[f32; 3]> = icon
        .pixels()
        .map(|p| [f32::from(p[0]), f32::from(p[1]), f32::from(p[2])])
        .collect();

    for _ in 0..EDGE_CLEANUP_ITERATIONS {
        let mut next = rgb.clone();

        for y in 0..h {
            for x in 0..w {
                let index = y * w + x;
                let pixel_alpha = alpha[index];
                if pixel_alpha >= EDGE_ALPHA_THRESHOLD {
                    continue;
                }

                let mut weight_sum = 0.0;
                let mut sum = [0.0f32; 3];
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let (nx, ny) = (x as isize + dx, y as isize + dy);
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let neighbor = ny as usize * w + nx as usize;
                    if alpha[neighbor] <= NEIGHBOR_MIN_ALPHA {
                        continue;
                    }
                    let weight = f32::from(alpha[neighbor]);
                    for (acc, channel) in sum.iter_mut().zip(rgb[neighbor]) {
                        *acc += channel * weight;
                    }
                    weight_sum += weight;
                }

                if weight_sum == 0.0 {
                    continue;
                }

                let blend = edge_blend_factor(pixel_alpha);
                for (channel, (out, acc)) in next[index].iter_mut().zip(sum).enumerate() {
                    *out = rgb[index][channel] * (1.0 - blend) + acc / weight_sum * blend;
                }
            }
        }

        rgb = next;
    }

    RgbaImage::from_fn(width, height, |x, y| {
        let index = y as usize * w + x as usize;
        let [r, g, b] = rgb[index];
        Rgba([clamp_byte(r), clamp_byte(g), clamp_byte(b), alpha[index]])
    })
}

/// Blend weight derived from the (already blurred) icon alpha.
pub fn softened_alpha(alpha: u8) -> f32 {
    ((f32::from(alpha) / 255.0 - DEPTH_ALPHA_FLOOR) / DEPTH_ALPHA_RANGE).clamp(0.0, 1.0)
}

/// Flatten depth to neutral grey wherever the icon is transparent.
pub fn composite_depth(depth: &GrayImage, icon_alpha: &GrayImage) -> Result<GrayImage> {
    ensure!(
        depth.dimensions() == icon_alpha.dimensions(),
        "Depth map is {:?} but icon alpha is {:?}",
        depth.dimensions(),
        icon_alpha.dimensions()
    );

    let smoothed = imageops::blur(icon_alpha, DEPTH_ALPHA_BLUR_SIGMA);
    let (width, height) = depth.dimensions();
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let weight = softened_alpha(smoothed.get_pixel(x, y)[0]);
        let depth_value = f32::from(depth.get_pixel(x, y)[0]);
        Luma([clamp_byte(
            NEUTRAL_DEPTH * (1.0 - weight) + depth_value * weight,
        )])
    }))
}

fn alpha_channel(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y)[3]])
    })
}

pub fn render_runtime_icon(icon: &DynamicImage, size: u32) -> RgbaImage {
    clean_icon_edges(&contain(icon, size))
}

/// Depth source is cover-fitted and greyscaled, then masked by the icon.
pub fn render_runtime_depth(
    depth: &DynamicImage,
    icon: &DynamicImage,
    size: u32,
) -> Result<GrayImage> {
    let depth = depth.resize_to_fill(size, size, FilterType::Lanczos3).to_luma8();
    let icon_alpha = alpha_channel(&contain(icon, size));
    composite_depth(&depth, &icon_alpha)
}

/// Build both runtime logo assets and write them to their configured paths.
pub fn process_logo(config: &LogoConfig) -> Result<()> {
    ensure!(config.runtime_size > 0, "Runtime size must be positive");
    ensure!(
        config.depth_source.exists(),
        "Depth source {:?} does not exist",
        config.depth_source
    );
    info!("Depth source: {}", config.depth_source.display());

    let icon = image::open(&config.icon_source)
        .with_context(|| format!("Failed to decode icon source {:?}", config.icon_source))?;
    let depth = image::open(&config.depth_source)
        .with_context(|| format!("Failed to decode depth source {:?}", config.depth_source))?;

    let runtime_icon = render_runtime_icon(&icon, config.runtime_size);
    write_png_rgba(&runtime_icon, &config.icon_output)?;

    let runtime_depth = render_runtime_depth(&depth, &icon, config.runtime_size)?;
    write_png_luma(&runtime_depth, &config.depth_output)?;

    info!("[OK] Runtime icon: {}", describe_image(&config.icon_output)?);
    info!("[OK] Runtime depth map: {}", describe_image(&config.depth_output)?);
    Ok(())
}
