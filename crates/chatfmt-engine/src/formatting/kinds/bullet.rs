use regex::Regex;
use std::sync::OnceLock;

/// List item marker: `-`, `+`, `*`, `1.` or `1)` followed by whitespace.
pub struct Bullet;

impl Bullet {
    /// The single glyph every list marker is rendered as.
    pub const GLYPH: char = '•';

    /// Captures the leading indentation in group 1.
    pub fn pattern() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| {
            Regex::new(r"(?m)^([ \t]*)(?:[-+*]|\d{1,9}[.)])[ \t]+").expect("Invalid bullet regex")
        })
    }
}
