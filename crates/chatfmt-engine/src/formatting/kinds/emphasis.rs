use regex::Regex;
use std::sync::OnceLock;

/// `**bold**` in the source dialect.
pub struct Bold;

impl Bold {
    /// Single marker that wraps bold text in every target.
    pub const TARGET_MARKER: char = '*';

    pub const TAG: &'static str = "BOLD";

    /// Captures the bold content in group 1. The content may not start with
    /// whitespace, so `** x**` stays literal.
    pub fn pattern() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| {
            Regex::new(r"\*\*([^*\s][^*]*?)\*\*").expect("Invalid bold regex")
        })
    }

    pub fn render(inner: &str) -> String {
        format!("{m}{inner}{m}", m = Self::TARGET_MARKER)
    }
}

/// Single-asterisk emphasis, rendered with underscores in every target.
///
/// The boundary rules are evaluated per character by the italic scanner
/// rather than by a regex, because both sides need to be checked without
/// consuming the neighbouring character.
pub struct Italic;

impl Italic {
    pub const SOURCE_MARKER: char = '*';
    pub const TARGET_MARKER: char = '_';

    /// May `prev` precede an opening `*`? `None` means start of line.
    pub fn is_opening_boundary(prev: Option<char>) -> bool {
        match prev {
            None => true,
            Some(c) => {
                c.is_whitespace() || matches!(c, '(' | '[' | '{' | '<' | '"' | '\'' | '“' | '‘' | '«')
            }
        }
    }

    /// May `next` follow a closing `*`? `None` means end of line.
    pub fn is_closing_boundary(next: Option<char>) -> bool {
        match next {
            None => true,
            Some(Self::SOURCE_MARKER) => false,
            Some(c) => {
                c.is_whitespace()
                    || c.is_ascii_punctuation()
                    || matches!(c, '”' | '’' | '»' | '…')
            }
        }
    }
}

/// `~~strike~~`, which only WhatsApp can render (as `~strike~`).
pub struct Strike;

impl Strike {
    pub const TARGET_MARKER: char = '~';

    pub fn pattern() -> &'static Regex {
        static STRIKE_REGEX: OnceLock<Regex> = OnceLock::new();
        STRIKE_REGEX.get_or_init(|| Regex::new(r"~~([^~\n]+?)~~").expect("Invalid strike regex"))
    }

    /// WhatsApp rendering of struck-through text.
    pub fn render(inner: &str) -> String {
        format!("{m}{inner}{m}", m = Self::TARGET_MARKER)
    }
}
