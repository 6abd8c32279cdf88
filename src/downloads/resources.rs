//! Third-party guides linked from the macOS download panel.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    OfficialGuide,
    Video,
    Article,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacResource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: &'static str,
    pub provider: &'static str,
    pub reason: &'static str,
    pub url: &'static str,
}

pub const MAC_INSTALL_RESOURCES: &[MacResource] = &[
    MacResource {
        kind: ResourceKind::OfficialGuide,
        title: "Install and uninstall apps from the internet or a disc on Mac",
        provider: "Apple Support",
        reason: "Official Apple instructions for opening a DMG and dragging an app into Applications.",
        url: "https://support.apple.com/guide/mac-help/mh35835/mac",
    },
    MacResource {
        kind: ResourceKind::OfficialGuide,
        title: "Folders that come with your Mac",
        provider: "Apple Support",
        reason: "Explains your home folder, which is where ~/Applications lives.",
        url: "https://support.apple.com/guide/mac-help/folders-that-come-with-your-mac-mchlp1143/mac",
    },
    MacResource {
        kind: ResourceKind::OfficialGuide,
        title: "Safely open apps on your Mac",
        provider: "Apple Support",
        reason: "Covers Gatekeeper prompts and what to do if macOS blocks the first launch.",
        url: "https://support.apple.com/en-us/102445",
    },
    MacResource {
        kind: ResourceKind::Video,
        title: "Understanding How To Install Mac Apps Downloaded From Web Sites",
        provider: "MacMost (YouTube)",
        reason: "Clear walkthrough of the DMG drag-and-drop flow for apps downloaded from websites.",
        url: "https://www.youtube.com/watch?v=vHdoYbrWQiY",
    },
    MacResource {
        kind: ResourceKind::Article,
        title: "How Many Mac Third-Party App Installs Work",
        provider: "MacMost",
        reason: "Written guide that explains the same DMG install flow and common mistakes.",
        url: "https://macmost.com/how-many-mac-third-party-app-installs-work.html",
    },
];
