//! Signal matching for platform and mac CPU architecture.

use regex::Regex;
use std::sync::LazyLock;

use super::{ClientSignals, MacArch, MacArchFallback, PlatformKind, PlatformRecommendation};

// Patterns run against lowercased input.
static MAC_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"macintosh|mac os x|macos").expect("valid mac pattern"));
static WINDOWS_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"windows|win32|win64").expect("valid windows pattern"));
static APPLE_SILICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"apple\s?silicon|arm64|aarch64|m1|m2|m3|m4").expect("valid arm pattern")
});
static INTEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"intel|x86_64|x64|amd64|x86").expect("valid intel pattern"));

fn classify_mac_arch(signals: &str) -> MacArch {
    let lower = signals.to_lowercase();

    if APPLE_SILICON.is_match(&lower) {
        MacArch::Arm64
    } else if INTEL.is_match(&lower) {
        MacArch::X64
    } else {
        MacArch::Unknown
    }
}

fn recommend(
    platform: PlatformKind,
    arch_signals: &str,
    fallback: MacArchFallback,
) -> PlatformRecommendation {
    match platform {
        PlatformKind::Windows => PlatformRecommendation::windows(),
        PlatformKind::Macos => {
            PlatformRecommendation::macos(classify_mac_arch(arch_signals), fallback)
        }
        PlatformKind::Other => PlatformRecommendation::other(),
    }
}

/// Classify the platform from whichever signal speaks first.
///
/// Precedence: client-hint platform, then the user-agent string, then the
/// legacy `navigator.platform` value.
fn classify_platform(signals: &ClientSignals) -> PlatformKind {
    let hint = signals
        .ua_data_platform
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if hint.contains("mac") {
        return PlatformKind::Macos;
    }
    if hint.contains("win") {
        return PlatformKind::Windows;
    }

    let ua = signals.user_agent.to_lowercase();
    if MAC_UA.is_match(&ua) {
        return PlatformKind::Macos;
    }
    if WINDOWS_UA.is_match(&ua) {
        return PlatformKind::Windows;
    }

    let legacy = signals
        .navigator_platform
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if legacy.contains("mac") {
        return PlatformKind::Macos;
    }
    if legacy.contains("win") {
        return PlatformKind::Windows;
    }

    PlatformKind::Other
}

/// Everything that may mention the CPU, joined for a single regex pass.
fn arch_signals(signals: &ClientSignals) -> String {
    [
        Some(signals.user_agent.as_str()),
        signals.ua_data_arch.as_deref(),
        signals.navigator_platform.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Detect the visitor's platform using the default mac fallback (Apple Silicon).
pub fn detect_platform(signals: &ClientSignals) -> PlatformRecommendation {
    detect_platform_with_fallback(signals, MacArchFallback::default())
}

pub fn detect_platform_with_fallback(
    signals: &ClientSignals,
    fallback: MacArchFallback,
) -> PlatformRecommendation {
    let platform = classify_platform(signals);
    recommend(platform, &arch_signals(signals), fallback)
}

/// Detect from a bare user-agent string, ignoring every other signal.
pub fn detect_from_user_agent(user_agent: &str) -> PlatformRecommendation {
    let ua = user_agent.to_lowercase();

    if WINDOWS_UA.is_match(&ua) {
        return PlatformRecommendation::windows();
    }
    if MAC_UA.is_match(&ua) {
        return recommend(PlatformKind::Macos, &ua, MacArchFallback::default());
    }
    PlatformRecommendation::other()
}
