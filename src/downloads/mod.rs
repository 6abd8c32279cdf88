//! Download catalog: the fixed set of installer variants offered on the site.

mod resources;

pub use resources::{MAC_INSTALL_RESOURCES, MacResource, ResourceKind};

use serde::{Deserialize, Serialize};

/// One downloadable package (or the release page fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DownloadVariant {
    WindowsNsis,
    WindowsMsi,
    MacArm64,
    MacX64,
    FallbackLatest,
}

/// Button label and target URL for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DownloadLink {
    pub label: &'static str,
    pub url: &'static str,
}

impl DownloadVariant {
    pub fn all() -> &'static [DownloadVariant] {
        &[
            DownloadVariant::WindowsNsis,
            DownloadVariant::WindowsMsi,
            DownloadVariant::MacArm64,
            DownloadVariant::MacX64,
            DownloadVariant::FallbackLatest,
        ]
    }

    /// Catalog key as used by the page (`windowsNsis`, `macX64`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            DownloadVariant::WindowsNsis => "windowsNsis",
            DownloadVariant::WindowsMsi => "windowsMsi",
            DownloadVariant::MacArm64 => "macArm64",
            DownloadVariant::MacX64 => "macX64",
            DownloadVariant::FallbackLatest => "fallbackLatest",
        }
    }

    pub fn link(&self) -> DownloadLink {
        match self {
            DownloadVariant::WindowsNsis => DownloadLink {
                label: "Download for Windows",
                url: "https://github.com/haan/UnimozerNext/releases/latest/download/UnimozerNext_latest_x64-setup.exe",
            },
            DownloadVariant::WindowsMsi => DownloadLink {
                label: "Download MSI for Managed Deployment",
                url: "https://github.com/haan/UnimozerNext/releases/latest/download/UnimozerNext_latest_x64-setup.msi",
            },
            DownloadVariant::MacArm64 => DownloadLink {
                label: "Download for Apple Silicon",
                url: "https://github.com/haan/UnimozerNext/releases/latest/download/UnimozerNext_latest_arm64.dmg",
            },
            DownloadVariant::MacX64 => DownloadLink {
                label: "Download for Intel Mac",
                url: "https://github.com/haan/UnimozerNext/releases/latest/download/UnimozerNext_latest_x64.dmg",
            },
            DownloadVariant::FallbackLatest => DownloadLink {
                label: "Open Latest Release Page",
                url: "https://github.com/haan/UnimozerNext/releases/latest",
            },
        }
    }

    /// Name used when reporting link health for this variant.
    pub fn check_name(&self) -> &'static str {
        match self {
            DownloadVariant::WindowsNsis => "Windows NSIS",
            DownloadVariant::WindowsMsi => "Windows MSI",
            DownloadVariant::MacArm64 => "macOS Apple Silicon arm64",
            DownloadVariant::MacX64 => "macOS Intel x64",
            DownloadVariant::FallbackLatest => "Latest release fallback",
        }
    }
}

/// Command shown to IT administrators for an unattended MSI install.
pub fn silent_install_command() -> String {
    let url = DownloadVariant::WindowsMsi.link().url;
    let file_name = url.rsplit('/').next().unwrap_or(url);
    format!("msiexec /i {} /qn /norestart", file_name)
}
