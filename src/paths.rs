//! Centralized path resolution for the site's source and generated assets.
//!
//! All paths are relative to the website root, which is the directory the
//! tool is run from (the same place `npm run` scripts execute).

use std::path::PathBuf;

/// Source artwork for the runtime icon.
pub fn icon_source() -> PathBuf {
    PathBuf::from("src/assets/logo-sources/icon.png")
}

/// Source depth map painted to match the icon.
pub fn depth_source() -> PathBuf {
    PathBuf::from("src/assets/logo-sources/icon_depthmap.png")
}

/// Generated icon served to the depth logo.
pub fn icon_output() -> PathBuf {
    PathBuf::from("public/icon_runtime.png")
}

/// Generated depth map served to the depth logo.
pub fn depth_output() -> PathBuf {
    PathBuf::from("public/icon_depthmap_runtime.png")
}

/// Directory holding raw screenshots captured from the app.
pub fn screenshot_sources_dir() -> PathBuf {
    PathBuf::from("src/assets/screenshots/sources")
}

/// Directory the carousel imports processed screenshots from.
pub fn screenshot_output_dir() -> PathBuf {
    PathBuf::from("src/assets/screenshots")
}

/// Default location of the tool configuration file.
pub fn config_file() -> PathBuf {
    PathBuf::from("site-tools.json")
}

/// Path to the logs directory (debug builds only write here).
pub fn logs_dir() -> PathBuf {
    PathBuf::from("logs")
}
