use regex::Regex;
use std::sync::OnceLock;

/// Horizontal rule: three or more hyphens alone on a line.
pub struct Rule;

impl Rule {
    /// What a rule is rendered as in every target.
    pub const SEPARATOR: &'static str = "──────────";

    pub fn pattern() -> &'static Regex {
        static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
        RULE_REGEX
            .get_or_init(|| Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").expect("Invalid rule regex"))
    }
}
