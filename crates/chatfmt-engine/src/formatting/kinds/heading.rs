use regex::Regex;
use std::sync::OnceLock;

use super::Bold;

/// ATX heading: one to six `#` followed by whitespace and the title.
///
/// `#hashtag` (no space) is deliberately not a heading.
pub struct Heading;

impl Heading {
    pub const TAG: &'static str = "HEAD";

    /// Captures the raw title in group 1.
    pub fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX
            .get_or_init(|| Regex::new(r"(?m)^#{1,6}[ \t]+(.+)$").expect("Invalid heading regex"))
    }

    /// Heading text with inner `**bold**` markers removed and outer whitespace trimmed.
    pub fn title(raw: &str) -> String {
        Bold::pattern().replace_all(raw, "${1}").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", "Title")]
    #[case("###### Deep", "Deep")]
    #[case("## Trailing space   ", "Trailing space   ")]
    fn captures_heading_title(#[case] line: &str, #[case] expected: &str) {
        let caps = Heading::pattern().captures(line).unwrap();
        assert_eq!(&caps[1], expected);
    }

    #[rstest]
    #[case("#hashtag")]
    #[case("####### seven")]
    #[case("text # not heading")]
    fn rejects_non_headings(#[case] line: &str) {
        assert!(Heading::pattern().captures(line).is_none());
    }

    #[test]
    fn title_strips_bold_and_whitespace() {
        assert_eq!(Heading::title(" **Big** news  "), "Big news");
    }
}
