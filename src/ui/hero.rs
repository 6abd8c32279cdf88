use serde::Serialize;

use crate::downloads::DownloadVariant;
use crate::platform::{PlatformKind, PlatformRecommendation};

/// Primary button in the hero header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroCta {
    pub label: &'static str,
    pub href: &'static str,
}

/// Windows visitors get a direct installer link; everyone else is sent to
/// the downloads section (mac visitors straight to their panel).
pub fn hero_cta(recommendation: &PlatformRecommendation) -> HeroCta {
    match recommendation.platform {
        PlatformKind::Windows => HeroCta {
            label: "Download for Windows",
            href: DownloadVariant::WindowsNsis.link().url,
        },
        PlatformKind::Macos => HeroCta {
            label: "Open macOS Downloads",
            href: "#downloads-macos",
        },
        PlatformKind::Other => HeroCta {
            label: "Open Downloads",
            href: "#downloads",
        },
    }
}
