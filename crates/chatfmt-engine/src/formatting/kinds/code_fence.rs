use regex::Regex;
use std::sync::OnceLock;

/// Fenced code block delimited by triple backticks.
///
/// Fences are "raw zones": nothing between the delimiters is ever rewritten.
/// An unterminated fence never matches and is left as plain text.
pub struct CodeFence;

impl CodeFence {
    /// Placeholder tag for protected fences.
    pub const TAG: &'static str = "FENCE";

    /// Matches a whole fence, opener to the nearest closer, across lines.
    pub fn pattern() -> &'static Regex {
        static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
        FENCE_REGEX.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("Invalid fence regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_multiline_fence() {
        let text = "before\n```rust\nlet x = 1;\n```\nafter";
        let m = CodeFence::pattern().find(text).unwrap();
        assert_eq!(m.as_str(), "```rust\nlet x = 1;\n```");
    }

    #[test]
    fn fence_match_is_non_greedy() {
        let text = "```a```\ntext\n```b```";
        let found: Vec<_> = CodeFence::pattern()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["```a```", "```b```"]);
    }

    #[test]
    fn unterminated_fence_does_not_match() {
        assert!(CodeFence::pattern().find("```rust\nlet x = 1;").is_none());
    }
}
