use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::formatting::{format_for_instagram, format_for_linkedin, format_for_whatsapp};

/// A messaging or social target the formatter can produce text for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    WhatsApp,
    #[default]
    LinkedIn,
    Instagram,
}

/// The renderer variant a platform uses.
///
/// WhatsApp interprets `*bold*` and `_italic_` itself. LinkedIn and Instagram
/// interpret no markup at all, so they share the plain social renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    WhatsApp,
    Social,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown platform: {0} (expected one of: whatsapp, linkedin, instagram)")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Instagram, Platform::WhatsApp];

    /// Minimum chunk budget accepted by front ends.
    pub const MIN_MAX_LEN: usize = 200;

    /// Stable lowercase key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::LinkedIn => "linkedin",
            Platform::Instagram => "instagram",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::WhatsApp => "WhatsApp",
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
        }
    }

    /// Default chunk budget, in characters, for a single post or message.
    pub fn default_max_len(self) -> usize {
        match self {
            Platform::WhatsApp => 3500,
            Platform::LinkedIn => 3500,
            Platform::Instagram => 2200,
        }
    }

    pub fn dialect(self) -> Dialect {
        match self {
            Platform::WhatsApp => Dialect::WhatsApp,
            Platform::LinkedIn | Platform::Instagram => Dialect::Social,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Formats `input` for the given platform.
pub fn format_for(platform: Platform, input: &str) -> String {
    match platform {
        Platform::WhatsApp => format_for_whatsapp(input),
        Platform::LinkedIn => format_for_linkedin(input),
        Platform::Instagram => format_for_instagram(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("whatsapp", Platform::WhatsApp)]
    #[case("LinkedIn", Platform::LinkedIn)]
    #[case(" INSTAGRAM ", Platform::Instagram)]
    fn parses_platform_keys(#[case] input: &str, #[case] expected: Platform) {
        assert_eq!(input.parse::<Platform>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert_eq!(err, UnknownPlatform("myspace".to_string()));
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn social_platforms_share_a_dialect() {
        assert_eq!(Platform::LinkedIn.dialect(), Dialect::Social);
        assert_eq!(Platform::Instagram.dialect(), Dialect::Social);
        assert_eq!(Platform::WhatsApp.dialect(), Dialect::WhatsApp);
    }

    #[test]
    fn default_budgets_respect_minimum() {
        for platform in Platform::ALL {
            assert!(platform.default_max_len() >= Platform::MIN_MAX_LEN);
        }
        assert_eq!(Platform::Instagram.default_max_len(), 2200);
    }

    #[test]
    fn format_for_dispatches_by_dialect() {
        assert_eq!(format_for(Platform::WhatsApp, "# Title"), "*Title*");
        assert_eq!(format_for(Platform::LinkedIn, "# Title"), "TITLE");
        assert_eq!(format_for(Platform::Instagram, "# Title"), "TITLE");
    }
}
