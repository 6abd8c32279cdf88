//! Download tab selection (Windows / macOS panels).

use serde::Serialize;

use crate::downloads::DownloadVariant;
use crate::platform::{PlatformKind, PlatformRecommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadTab {
    Windows,
    Macos,
}

impl DownloadTab {
    pub fn all() -> &'static [DownloadTab] {
        &[DownloadTab::Windows, DownloadTab::Macos]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DownloadTab::Windows => "Windows",
            DownloadTab::Macos => "macOS",
        }
    }

    /// Element id of the tab button.
    pub fn tab_id(&self) -> &'static str {
        match self {
            DownloadTab::Windows => "downloads-tab-windows",
            DownloadTab::Macos => "downloads-tab-macos",
        }
    }

    /// Element id of the panel the tab controls.
    pub fn panel_id(&self) -> &'static str {
        match self {
            DownloadTab::Windows => "downloads-windows",
            DownloadTab::Macos => "downloads-macos",
        }
    }

    /// Whether the "Recommended for your device" badge shows on this panel.
    pub fn shows_badge(&self, recommendation: &PlatformRecommendation) -> bool {
        match (self, recommendation.recommended_download) {
            (DownloadTab::Windows, Some(DownloadVariant::WindowsNsis)) => true,
            (DownloadTab::Macos, Some(DownloadVariant::MacArm64 | DownloadVariant::MacX64)) => {
                true
            }
            _ => false,
        }
    }
}

/// Map a URL fragment to the tab it addresses.
///
/// Both the panel id and the legacy `downloads-panel-*` anchors are accepted.
pub fn tab_for_fragment(fragment: &str) -> Option<DownloadTab> {
    match fragment.to_lowercase().as_str() {
        "#downloads-windows" | "#downloads-panel-windows" => Some(DownloadTab::Windows),
        "#downloads-macos" | "#downloads-panel-macos" => Some(DownloadTab::Macos),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// User clicked a tab button.
    Select(DownloadTab),
    /// The location hash changed.
    FragmentChanged(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub active: DownloadTab,
}

impl TabState {
    /// State on mount: seeded from the recommendation, then the current
    /// fragment (if it names a tab) takes over.
    pub fn initial(recommendation: &PlatformRecommendation, fragment: Option<&str>) -> Self {
        let active = match recommendation.platform {
            PlatformKind::Macos => DownloadTab::Macos,
            PlatformKind::Windows | PlatformKind::Other => DownloadTab::Windows,
        };
        let state = Self { active };
        match fragment {
            Some(fragment) => state.reduce(TabEvent::FragmentChanged(fragment.to_string())),
            None => state,
        }
    }

    pub fn reduce(self, event: TabEvent) -> Self {
        match event {
            TabEvent::Select(tab) => Self { active: tab },
            TabEvent::FragmentChanged(fragment) => match tab_for_fragment(&fragment) {
                Some(tab) => Self { active: tab },
                None => self,
            },
        }
    }

    pub fn is_selected(&self, tab: DownloadTab) -> bool {
        self.active == tab
    }
}
