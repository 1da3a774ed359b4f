//! Emphasis and heading rendering for each target dialect.
//!
//! Resolved emphasis is tokenized as soon as it is produced: the heading and
//! bold rewrites emit placeholders whose originals are the final `*...*`
//! text, the italic scanner only ever sees the remaining asterisks, and the
//! placeholders are expanded last.

use crate::platform::Dialect;

use super::cursor::Cursor;
use super::kinds::{Bold, Heading, Italic, Strike};
use super::protect::{Sentinel, SpanStore};

/// Renders headings and emphasis in the given dialect.
///
/// `sentinel` must be the one chosen for the conversion's input, so the
/// emphasis placeholders cannot collide with it.
pub fn render(text: &str, dialect: Dialect, sentinel: Sentinel) -> String {
    let mut resolved = SpanStore::new(sentinel);

    let text = render_headings(text, dialect, &mut resolved);
    let text = resolve_bold(&text, &mut resolved);
    let text = match dialect {
        Dialect::WhatsApp => whatsapp_strike(&text),
        Dialect::Social => text,
    };
    let text = convert_italics(&text);

    resolved.restore(&text)
}

/// WhatsApp headings become a bold line (strikethrough and italics inside it
/// are converted first); social headings are upper-cased.
fn render_headings(text: &str, dialect: Dialect, resolved: &mut SpanStore) -> String {
    Heading::pattern()
        .replace_all(text, |caps: &regex::Captures| {
            let title = Heading::title(&caps[1]);
            match dialect {
                Dialect::WhatsApp if title.is_empty() => title,
                Dialect::WhatsApp => {
                    let title = convert_italics(&whatsapp_strike(&title));
                    resolved.shield(Heading::TAG, Bold::render(&title))
                }
                Dialect::Social => title.to_uppercase(),
            }
        })
        .into_owned()
}

/// `**bold**` becomes `*bold*` in both dialects. For the social targets the
/// asterisks are purely cosmetic.
fn resolve_bold(text: &str, resolved: &mut SpanStore) -> String {
    Bold::pattern()
        .replace_all(text, |caps: &regex::Captures| {
            resolved.shield(Bold::TAG, Bold::render(&caps[1]))
        })
        .into_owned()
}

fn whatsapp_strike(text: &str) -> String {
    Strike::pattern()
        .replace_all(text, |caps: &regex::Captures| Strike::render(&caps[1]))
        .into_owned()
}

/// Rewrites `*span*` to `_span_` wherever both asterisks sit on a word
/// boundary. A `*` followed by whitespace (a list bullet) never opens a span.
pub fn convert_italics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cur = Cursor::new(text);

    while let Some(c) = cur.peek() {
        if c == Italic::SOURCE_MARKER
            && let Some(end) = italic_close(&cur)
        {
            out.push(Italic::TARGET_MARKER);
            out.push_str(&text[cur.i + 1..end]);
            out.push(Italic::TARGET_MARKER);
            cur.i = end + 1;
            continue;
        }
        out.push(c);
        cur.bump();
    }

    out
}

/// Byte index of the `*` closing a span opened at the cursor, if the
/// cursor's `*` opens one at all.
fn italic_close(cur: &Cursor<'_>) -> Option<usize> {
    if !Italic::is_opening_boundary(cur.prev_in_line()) {
        return None;
    }
    let first = cur.peek_next()?;
    if first == Italic::SOURCE_MARKER || first.is_whitespace() {
        return None;
    }

    let mut inner = cur.clone();
    inner.bump();
    let end = inner.find_in_line(Italic::SOURCE_MARKER)?;

    let before = cur.s[..end].chars().next_back();
    let after = cur.s[end + 1..].chars().next();
    let closes = before.is_some_and(|c| !c.is_whitespace()) && Italic::is_closing_boundary(after);
    closes.then_some(end)
}
