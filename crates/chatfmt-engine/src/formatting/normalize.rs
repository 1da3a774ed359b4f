use regex::Regex;
use std::sync::OnceLock;

/// Unifies `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapses any run of two or more blank (or whitespace-only) lines into a
/// single blank line.
pub fn collapse_blank_runs(text: &str) -> String {
    static BLANK_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN_REGEX
        .get_or_init(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("Invalid blank run regex"))
        .replace_all(text, "\n\n")
        .into_owned()
}
