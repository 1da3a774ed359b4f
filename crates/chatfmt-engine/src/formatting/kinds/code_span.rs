use regex::Regex;
use std::sync::OnceLock;

/// Inline code span: single backticks, never spanning a newline.
pub struct CodeSpan;

impl CodeSpan {
    pub const TAG: &'static str = "CODE";

    pub fn pattern() -> &'static Regex {
        static SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        SPAN_REGEX.get_or_init(|| Regex::new(r"`[^`\n]+`").expect("Invalid code span regex"))
    }
}
