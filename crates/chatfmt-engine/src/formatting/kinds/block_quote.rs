use regex::Regex;
use std::sync::OnceLock;

/// Blockquote marker.
///
/// Only one leading `>` (plus one optional space) is removed per line, so
/// nested quotes keep their inner markers.
pub struct BlockQuote;

impl BlockQuote {
    pub fn pattern() -> &'static Regex {
        static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
        QUOTE_REGEX.get_or_init(|| Regex::new(r"(?m)^> ?").expect("Invalid blockquote regex"))
    }
}
