//! Unit tests for platform detection.

use super::*;
use crate::downloads::DownloadVariant;

const WINDOWS_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const MAC_INTEL: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15)";
const LINUX_FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

// Windows
#[test]
fn test_windows_user_agent_recommends_nsis() {
    for ua in [WINDOWS_CHROME, "something Win32 something", "WINDOWS phone"] {
        let rec = detect_platform(&ClientSignals::from_user_agent(ua));
        assert_eq!(rec.platform, PlatformKind::Windows, "ua: {ua}");
        assert_eq!(rec.mac_arch, MacArch::Unknown);
        assert_eq!(rec.recommended_download, Some(DownloadVariant::WindowsNsis));
    }
}

#[test]
fn test_windows_client_hint_wins_over_user_agent() {
    let signals = ClientSignals {
        user_agent: MAC_INTEL.to_string(),
        ua_data_platform: Some("Windows".to_string()),
        ..Default::default()
    };
    assert_eq!(detect_platform(&signals).platform, PlatformKind::Windows);
}

// macOS
#[test]
fn test_mac_intel_user_agent_recommends_x64() {
    let rec = detect_platform(&ClientSignals::from_user_agent(MAC_INTEL));
    assert_eq!(
        rec,
        PlatformRecommendation {
            platform: PlatformKind::Macos,
            mac_arch: MacArch::X64,
            recommended_download: Some(DownloadVariant::MacX64),
        }
    );
}

#[test]
fn test_mac_apple_silicon_arch_hint_recommends_arm64() {
    let signals = ClientSignals {
        user_agent: MAC_INTEL.to_string(),
        ua_data_platform: Some("macOS".to_string()),
        ua_data_arch: Some("arm64".to_string()),
        navigator_platform: None,
    };
    let rec = detect_platform(&signals);
    assert_eq!(rec.platform, PlatformKind::Macos);
    assert_eq!(rec.mac_arch, MacArch::Arm64);
    assert_eq!(rec.recommended_download, Some(DownloadVariant::MacArm64));
}

#[test]
fn test_apple_silicon_markers() {
    for marker in ["Apple Silicon", "applesilicon", "aarch64", "M2"] {
        let ua = format!("Mozilla/5.0 (Macintosh; {marker})");
        let rec = detect_platform(&ClientSignals::from_user_agent(ua.clone()));
        assert_eq!(rec.mac_arch, MacArch::Arm64, "ua: {ua}");
        assert_eq!(rec.recommended_download, Some(DownloadVariant::MacArm64));
    }
}

#[test]
fn test_unknown_mac_arch_defaults_to_arm64() {
    let rec = detect_platform(&ClientSignals::from_user_agent("Mozilla/5.0 (Macintosh)"));
    assert_eq!(rec.mac_arch, MacArch::Unknown);
    assert_eq!(rec.recommended_download, Some(DownloadVariant::MacArm64));
}

#[test]
fn test_unknown_mac_arch_respects_configured_fallback() {
    let signals = ClientSignals::from_user_agent("Mozilla/5.0 (Macintosh)");
    let rec = detect_platform_with_fallback(&signals, MacArchFallback::X64);
    assert_eq!(rec.mac_arch, MacArch::Unknown);
    assert_eq!(rec.recommended_download, Some(DownloadVariant::MacX64));
}

#[test]
fn test_legacy_platform_used_when_user_agent_is_silent() {
    let signals = ClientSignals {
        user_agent: "Mozilla/5.0".to_string(),
        navigator_platform: Some("MacIntel".to_string()),
        ..Default::default()
    };
    let rec = detect_platform(&signals);
    assert_eq!(rec.platform, PlatformKind::Macos);
    // "MacIntel" doubles as an architecture signal
    assert_eq!(rec.mac_arch, MacArch::X64);

    let signals = ClientSignals {
        user_agent: String::new(),
        navigator_platform: Some("Win32".to_string()),
        ..Default::default()
    };
    assert_eq!(detect_platform(&signals).platform, PlatformKind::Windows);
}

// Other
#[test]
fn test_unrecognized_signals_yield_no_recommendation() {
    for ua in [LINUX_FIREFOX, "", "curl/8.4.0"] {
        let rec = detect_platform(&ClientSignals::from_user_agent(ua));
        assert_eq!(rec, PlatformRecommendation::other(), "ua: {ua}");
    }
}

#[test]
fn test_empty_client_hints_fall_through() {
    let signals = ClientSignals {
        user_agent: WINDOWS_CHROME.to_string(),
        ua_data_platform: Some(String::new()),
        ua_data_arch: Some(String::new()),
        navigator_platform: Some(String::new()),
    };
    assert_eq!(detect_platform(&signals).platform, PlatformKind::Windows);
}

// User-agent only path
#[test]
fn test_detect_from_user_agent() {
    assert_eq!(detect_from_user_agent(WINDOWS_CHROME), PlatformRecommendation::windows());
    assert_eq!(detect_from_user_agent(MAC_INTEL).mac_arch, MacArch::X64);
    assert_eq!(detect_from_user_agent(LINUX_FIREFOX), PlatformRecommendation::other());
}

// Serialization
#[test]
fn test_recommendation_json_shape() {
    let rec = detect_platform(&ClientSignals::from_user_agent(MAC_INTEL));
    let json = serde_json::to_value(rec).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "platform": "macos",
            "macArch": "x64",
            "recommendedDownload": "macX64",
        })
    );

    let json = serde_json::to_value(PlatformRecommendation::other()).unwrap();
    assert_eq!(json["recommendedDownload"], serde_json::Value::Null);
}

#[test]
fn test_signals_parse_from_camel_case_json() {
    let json = r#"{ "userAgent": "Mozilla/5.0", "uaDataPlatform": "macOS" }"#;
    let signals: ClientSignals = serde_json::from_str(json).unwrap();
    assert_eq!(signals.ua_data_platform.as_deref(), Some("macOS"));
    assert!(signals.ua_data_arch.is_none());
}
