//! Built-in link target lists.

use crate::downloads::{DownloadVariant, MAC_INSTALL_RESOURCES};

use super::LinkTarget;

/// Release download URLs every site build must be able to reach.
pub fn required_targets() -> Vec<LinkTarget> {
    [
        DownloadVariant::WindowsNsis,
        DownloadVariant::WindowsMsi,
        DownloadVariant::MacX64,
        DownloadVariant::MacArm64,
        DownloadVariant::FallbackLatest,
    ]
    .iter()
    .map(|variant| LinkTarget::new(variant.check_name(), variant.link().url))
    .collect()
}

/// Third-party install guides linked from the macOS panel.
pub fn resource_targets() -> Vec<LinkTarget> {
    MAC_INSTALL_RESOURCES
        .iter()
        .map(|resource| LinkTarget::new(resource.title, resource.url))
        .collect()
}
