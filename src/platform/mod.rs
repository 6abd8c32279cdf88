//! Platform detection: maps browser signals to a recommended download.
//!
//! The page never reads `navigator` directly; it collects the raw strings
//! into a [`ClientSignals`] bundle and hands them to [`detect_platform`].

mod detector;

#[cfg(test)]
mod tests;

pub use detector::{detect_from_user_agent, detect_platform, detect_platform_with_fallback};

use serde::{Deserialize, Serialize};

use crate::downloads::DownloadVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Windows,
    Macos,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacArch {
    Arm64,
    X64,
    Unknown,
}

/// Which mac build to recommend when the CPU architecture can't be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacArchFallback {
    #[default]
    Arm64,
    X64,
}

impl MacArchFallback {
    pub fn variant(&self) -> DownloadVariant {
        match self {
            MacArchFallback::Arm64 => DownloadVariant::MacArm64,
            MacArchFallback::X64 => DownloadVariant::MacX64,
        }
    }
}

/// Raw platform signals as exposed by the browser.
///
/// Only `user_agent` is always available; client hints are opt-in and
/// `navigator.platform` is deprecated but still widely populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSignals {
    pub user_agent: String,
    #[serde(default)]
    pub ua_data_platform: Option<String>,
    #[serde(default)]
    pub ua_data_arch: Option<String>,
    #[serde(default)]
    pub navigator_platform: Option<String>,
}

impl ClientSignals {
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }
}

/// Result of platform detection for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRecommendation {
    pub platform: PlatformKind,
    pub mac_arch: MacArch,
    pub recommended_download: Option<DownloadVariant>,
}

impl PlatformRecommendation {
    pub fn windows() -> Self {
        Self {
            platform: PlatformKind::Windows,
            mac_arch: MacArch::Unknown,
            recommended_download: Some(DownloadVariant::WindowsNsis),
        }
    }

    pub fn macos(mac_arch: MacArch, fallback: MacArchFallback) -> Self {
        let variant = match mac_arch {
            MacArch::Arm64 => DownloadVariant::MacArm64,
            MacArch::X64 => DownloadVariant::MacX64,
            MacArch::Unknown => fallback.variant(),
        };
        Self {
            platform: PlatformKind::Macos,
            mac_arch,
            recommended_download: Some(variant),
        }
    }

    pub fn other() -> Self {
        Self {
            platform: PlatformKind::Other,
            mac_arch: MacArch::Unknown,
            recommended_download: None,
        }
    }
}
