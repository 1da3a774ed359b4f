use regex::Regex;
use std::sync::OnceLock;

/// Inline link `[text](url)` with an http(s) target.
///
/// Other schemes (`mailto:`, relative paths, ...) are not rewritten.
pub struct Link;

impl Link {
    /// Placeholder tag for shielded URLs.
    pub const TAG: &'static str = "LINK";

    /// Captures the link text in group 1 and the URL in group 2.
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\]\n]+)\]\((https?://[^\s)]+)\)").expect("Invalid link regex")
        })
    }

    /// Plain-text rendering of a link.
    pub fn render(text: &str, url: &str) -> String {
        format!("{text} ({url})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_http_links() {
        let caps = Link::pattern()
            .captures("see [Docs](http://docs.rs/regex) now")
            .unwrap();
        assert_eq!(&caps[1], "Docs");
        assert_eq!(&caps[2], "http://docs.rs/regex");
    }

    #[test]
    fn ignores_other_schemes() {
        assert!(Link::pattern().captures("[mail](mailto:a@b.c)").is_none());
        assert!(Link::pattern().captures("[rel](./page.md)").is_none());
    }

    #[test]
    fn renders_text_then_url() {
        assert_eq!(Link::render("Site", "https://x.io"), "Site (https://x.io)");
    }
}
