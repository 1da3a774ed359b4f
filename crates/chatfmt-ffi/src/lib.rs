//! UniFFI bindings for chatfmt hosts
//!
//! Exposes the engine's conversion and splitting functions over a plain
//! string/number contract. Hosts own everything else: layout, the platform
//! picker, clipboard access and notifications.

use chatfmt_engine::{Platform, UnknownPlatform};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Unknown platform: {reason}")]
    UnknownPlatform { reason: String },
}

impl From<UnknownPlatform> for FfiError {
    fn from(e: UnknownPlatform) -> Self {
        FfiError::UnknownPlatform { reason: e.0 }
    }
}

// ============ DTOs ============

/// A platform the host can offer in its picker.
#[derive(uniffi::Record)]
pub struct PlatformInfo {
    /// Stable key accepted by `format_for_platform` (e.g. "whatsapp")
    pub key: String,
    /// Display name
    pub label: String,
    /// Suggested chunk budget in characters
    pub default_max_len: u32,
    /// Smallest chunk budget the host should allow
    pub min_max_len: u32,
}

impl PlatformInfo {
    fn from_engine(platform: Platform) -> Self {
        Self {
            key: platform.key().to_string(),
            label: platform.label().to_string(),
            default_max_len: saturating_u32(platform.default_max_len()),
            min_max_len: saturating_u32(Platform::MIN_MAX_LEN),
        }
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

// ============ Standalone Functions ============

/// Absent input is formatted as an empty string.
#[uniffi::export]
pub fn format_for_whatsapp(input: Option<String>) -> String {
    chatfmt_engine::format_for_whatsapp(&input.unwrap_or_default())
}

#[uniffi::export]
pub fn format_for_linkedin(input: Option<String>) -> String {
    chatfmt_engine::format_for_linkedin(&input.unwrap_or_default())
}

#[uniffi::export]
pub fn format_for_instagram(input: Option<String>) -> String {
    chatfmt_engine::format_for_instagram(&input.unwrap_or_default())
}

/// Format for a platform named by its key ("whatsapp", "linkedin", "instagram").
#[uniffi::export]
pub fn format_for_platform(platform: String, input: Option<String>) -> Result<String, FfiError> {
    let platform: Platform = platform.parse()?;
    Ok(chatfmt_engine::format_for(
        platform,
        &input.unwrap_or_default(),
    ))
}

/// Split rendered text into chunks. A `max_len` of zero or less disables
/// splitting.
#[uniffi::export]
pub fn split_by_max_len(text: Option<String>, max_len: i64) -> Vec<String> {
    let max_len = usize::try_from(max_len).unwrap_or(0);
    chatfmt_engine::split_by_max_len(&text.unwrap_or_default(), max_len)
}

/// Every supported platform, in display order.
#[uniffi::export]
pub fn list_platforms() -> Vec<PlatformInfo> {
    Platform::ALL
        .into_iter()
        .map(PlatformInfo::from_engine)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_input_is_empty() {
        assert_eq!(format_for_whatsapp(None), "");
        assert_eq!(format_for_linkedin(None), "");
        assert_eq!(format_for_instagram(None), "");
        assert_eq!(split_by_max_len(None, 500), vec![String::new()]);
    }

    #[test]
    fn test_format_for_whatsapp() {
        let out = format_for_whatsapp(Some("**Hi** *there*".to_string()));
        assert_eq!(out, "*Hi* _there_");
    }

    #[test]
    fn test_format_for_platform_by_key() {
        let out = format_for_platform("linkedin".to_string(), Some("# Title".to_string())).unwrap();
        assert_eq!(out, "TITLE");
    }

    #[test]
    fn test_format_for_unknown_platform() {
        let err = format_for_platform("fax".to_string(), Some("x".to_string())).unwrap_err();
        match err {
            FfiError::UnknownPlatform { reason } => assert_eq!(reason, "fax"),
        }
    }

    #[test]
    fn test_negative_max_len_disables_splitting() {
        let text = Some("aaa\n\nbbb".to_string());
        assert_eq!(split_by_max_len(text.clone(), -1), vec!["aaa\n\nbbb"]);
        assert_eq!(split_by_max_len(text.clone(), 0), vec!["aaa\n\nbbb"]);
        assert_eq!(split_by_max_len(text, 3), vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_list_platforms() {
        let platforms = list_platforms();
        let keys: Vec<_> = platforms.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["linkedin", "instagram", "whatsapp"]);
        assert!(platforms.iter().all(|p| p.default_max_len >= p.min_max_len));
    }
}
