//! Coarse mobile-vs-desktop detection.
//!
//! Gates whether the clipboard is read automatically or only on explicit
//! request.

/// User-agent fragments that indicate a handheld device.
const MOBILE_MARKERS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "webos",
    "mobile",
];

/// Environment variables set by terminal apps on Android.
const MOBILE_ENV_MARKERS: &[&str] = &["TERMUX_VERSION", "ANDROID_ROOT", "ANDROID_DATA"];

/// Device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Phone or tablet.
    Mobile,
    /// Everything else.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classifies a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classifies the current process from its environment.
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var_os(key).is_some())
    }

    fn from_env(has_var: impl Fn(&str) -> bool) -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            return DeviceClass::Mobile;
        }
        if MOBILE_ENV_MARKERS.iter().any(|key| has_var(*key)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Returns true if the clipboard may be read without an explicit request.
    pub fn auto_reads_clipboard(self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }
}
