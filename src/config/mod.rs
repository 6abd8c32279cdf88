use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_LINK_TIMEOUT_MS, RUNTIME_SIZE};
use crate::links::LinkTarget;
use crate::platform::MacArchFallback;

/// Tool configuration persisted in `site-tools.json`.
///
/// Every section is optional; anything left out falls back to the values
/// the site ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsConfig {
    #[serde(default)]
    pub logo: LogoConfig,

    #[serde(default = "default_screenshot_jobs")]
    pub screenshots: Vec<ScreenshotJob>,

    #[serde(default)]
    pub links: LinkCheckConfig,

    /// Mac build recommended when the CPU can't be detected
    #[serde(default)]
    pub mac_arch_fallback: MacArchFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoConfig {
    pub icon_source: PathBuf,
    pub depth_source: PathBuf,
    pub icon_output: PathBuf,
    pub depth_output: PathBuf,
    pub runtime_size: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            icon_source: crate::paths::icon_source(),
            depth_source: crate::paths::depth_source(),
            icon_output: crate::paths::icon_output(),
            depth_output: crate::paths::depth_output(),
            runtime_size: RUNTIME_SIZE,
        }
    }
}

/// Rectangle cut out of a source screenshot, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotJob {
    pub name: String,
    pub input: PathBuf,
    pub output_webp: PathBuf,
    pub output_jpeg: PathBuf,
    pub extract: CropRect,
    pub resize: TargetSize,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkCheckConfig {
    pub timeout_ms: u64,
    /// Overrides the release download targets when non-empty
    pub targets: Vec<LinkTarget>,
}

impl Default for LinkCheckConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_LINK_TIMEOUT_MS,
            targets: Vec::new(),
        }
    }
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn screenshot_job(name: &str, stem: &str, extract: CropRect) -> ScreenshotJob {
    let output_dir = crate::paths::screenshot_output_dir();
    ScreenshotJob {
        name: name.to_string(),
        input: crate::paths::screenshot_sources_dir().join(format!("{stem}.png")),
        output_webp: output_dir.join(format!("{stem}.webp")),
        output_jpeg: output_dir.join(format!("{stem}.jpg")),
        extract,
        resize: TargetSize {
            width: 1600,
            height: 900,
        },
        jpeg_quality: DEFAULT_JPEG_QUALITY,
    }
}

pub fn default_screenshot_jobs() -> Vec<ScreenshotJob> {
    vec![
        screenshot_job(
            "UML diagram carousel image",
            "feature-uml-diagram",
            CropRect {
                left: 0,
                top: 100,
                width: 1426,
                height: 802,
            },
        ),
        screenshot_job(
            "Wizard carousel image",
            "feature-wizard",
            CropRect {
                left: 64,
                top: 286,
                width: 1200,
                height: 675,
            },
        ),
    ]
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ToolsConfig {
    /// Built-in configuration, equivalent to an empty config file.
    pub fn builtin() -> Self {
        Self {
            logo: LogoConfig::default(),
            screenshots: default_screenshot_jobs(),
            links: LinkCheckConfig::default(),
            mac_arch_fallback: MacArchFallback::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Configuration file is not valid")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `site-tools.json` in the
    /// working directory is used if present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = crate::paths::config_file();
                if !path.exists() {
                    info!("No config file found, using defaults");
                    return Ok(Self::builtin());
                }
                path
            }
        };

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read configuration file {:?}", path))?;
        let config =
            Self::from_json(&json).with_context(|| format!("Failed to load {:?}", path))?;
        info!("Loaded config from {:?}", path);
        debug!(
            "{} screenshot job(s), {} custom link target(s)",
            config.screenshots.len(),
            config.links.targets.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_matches_builtin() {
        let config = ToolsConfig::from_json("{}").unwrap();
        let builtin = ToolsConfig::builtin();
        assert_eq!(config.logo.runtime_size, RUNTIME_SIZE);
        assert_eq!(config.logo.icon_output, builtin.logo.icon_output);
        assert_eq!(config.screenshots.len(), 2);
        assert_eq!(config.links.timeout_ms, DEFAULT_LINK_TIMEOUT_MS);
        assert!(config.links.targets.is_empty());
        assert_eq!(config.mac_arch_fallback, MacArchFallback::Arm64);
    }

    #[test]
    fn test_default_screenshot_jobs() {
        let jobs = default_screenshot_jobs();
        assert_eq!(jobs[0].extract.top, 100);
        assert_eq!(jobs[1].extract.left, 64);
        for job in &jobs {
            assert_eq!(job.resize, TargetSize { width: 1600, height: 900 });
            assert_eq!(job.jpeg_quality, 86);
            assert_eq!(job.output_webp.extension().unwrap(), "webp");
            assert_eq!(job.output_jpeg.extension().unwrap(), "jpg");
        }
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "macArchFallback": "x64",
            "logo": { "runtimeSize": 256 },
            "links": {
                "timeoutMs": 500,
                "targets": [{ "name": "Home", "url": "https://example.com" }]
            }
        }"#;
        let config = ToolsConfig::from_json(json).unwrap();
        assert_eq!(config.mac_arch_fallback, MacArchFallback::X64);
        assert_eq!(config.logo.runtime_size, 256);
        assert_eq!(config.logo.icon_source, crate::paths::icon_source());
        assert_eq!(config.links.timeout_ms, 500);
        assert_eq!(config.links.targets[0].name, "Home");
    }

    #[test]
    fn test_screenshot_job_quality_defaults() {
        let json = r#"{
            "screenshots": [{
                "name": "Overview",
                "input": "in.png",
                "outputWebp": "out.webp",
                "outputJpeg": "out.jpg",
                "extract": { "left": 0, "top": 0, "width": 10, "height": 10 },
                "resize": { "width": 20, "height": 20 }
            }]
        }"#;
        let config = ToolsConfig::from_json(json).unwrap();
        assert_eq!(config.screenshots.len(), 1);
        assert_eq!(config.screenshots[0].jpeg_quality, DEFAULT_JPEG_QUALITY);
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        assert!(ToolsConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(ToolsConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site-tools.json");
        std::fs::write(&path, r#"{ "links": { "timeoutMs": 1234 } }"#).unwrap();

        let config = ToolsConfig::load(Some(&path)).unwrap();
        assert_eq!(config.links.timeout_ms, 1234);
        assert_eq!(config.screenshots.len(), 2);
    }
}
