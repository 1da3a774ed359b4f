//! Markdown to chat dialect conversion.
//!
//! Every conversion is a fixed sequence of pure string passes:
//!
//! 1. line endings are unified,
//! 2. code fences and inline code are lifted out as placeholder tokens,
//! 3. blockquotes, rules, links and tables are rewritten (link URLs become
//!    tokens too),
//! 4. headings and emphasis are rendered for the target dialect,
//! 5. list markers become the bullet glyph,
//! 6. blank-line runs are collapsed and the code is put back.
//!
//! The passes are line and pattern oriented. There is no Markdown AST.

pub mod bullets;
pub mod cursor;
pub mod dialect;
pub mod kinds;
pub mod normalize;
pub mod protect;
pub mod structure;

use crate::platform::Dialect;

use normalize::{collapse_blank_runs, normalize_line_endings};

/// Converts assistant-style Markdown into the given dialect.
pub fn format_markdown(input: &str, dialect: Dialect) -> String {
    let text = normalize_line_endings(input);
    let (masked, mut code) = protect::protect(&text);

    let text = structure::clean(&masked, &mut code);
    let text = dialect::render(&text, dialect, code.sentinel());
    let text = bullets::normalize_bullets(&text);
    // Collapse before restoring so blank lines inside fences survive.
    let text = collapse_blank_runs(&text);

    let text = protect::restore(&text, &code);
    text.trim().to_string()
}

pub fn format_for_whatsapp(input: &str) -> String {
    format_markdown(input, Dialect::WhatsApp)
}

pub fn format_for_linkedin(input: &str) -> String {
    format_markdown(input, Dialect::Social)
}

pub fn format_for_instagram(input: &str) -> String {
    format_markdown(input, Dialect::Social)
}
