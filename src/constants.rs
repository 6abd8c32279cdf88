//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Edge length of the generated runtime icon and depth map, in pixels
pub const RUNTIME_SIZE: u32 = 512;

/// Pixels at or above this alpha keep their original color during edge cleanup
pub const EDGE_ALPHA_THRESHOLD: u8 = 96;

/// Neighbours at or below this alpha do not contribute to the edge average
pub const NEIGHBOR_MIN_ALPHA: u8 = 8;

/// Pixels at or below this alpha are fully replaced by the neighbour average
pub const FULL_BLEND_ALPHA: u8 = 24;

/// Number of smoothing passes over the icon edge
pub const EDGE_CLEANUP_ITERATIONS: usize = 5;

/// Gaussian sigma applied to the icon alpha before it drives the depth blend
pub const DEPTH_ALPHA_BLUR_SIGMA: f32 = 1.2;

/// Lower clamp bound of the softened alpha band (fraction of full alpha)
pub const DEPTH_ALPHA_FLOOR: f32 = 0.02;

/// Width of the softened alpha band (fraction of full alpha)
pub const DEPTH_ALPHA_RANGE: f32 = 0.96;

/// Depth value used where the icon is fully transparent
pub const NEUTRAL_DEPTH: f32 = 128.0;

/// Default JPEG quality for transcoded screenshots
pub const DEFAULT_JPEG_QUALITY: u8 = 86;

/// Per-request timeout for link checks, in milliseconds
pub const DEFAULT_LINK_TIMEOUT_MS: u64 = 20_000;

/// Maximum redirects followed by a single link check
pub const MAX_LINK_REDIRECTS: u32 = 10;

/// User agent sent by the link checker
pub const LINK_CHECK_USER_AGENT: &str = "unimozer-site-link-checker";
