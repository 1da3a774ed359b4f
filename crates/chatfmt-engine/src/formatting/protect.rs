//! Placeholder protection for text that later stages must not rewrite.
//!
//! Code is lifted out of the working text before any rewriting and put back
//! verbatim at the end. The same mechanism shields emphasis that has already
//! been resolved, so the italic pass cannot re-read it.

use regex::{Captures, Regex};

use super::kinds::{CodeFence, CodeSpan};

/// Bracket glyphs wrapped around every placeholder token.
///
/// Chosen per conversion so that neither glyph occurs in the input, which
/// makes every token impossible to confuse with input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    pub open: char,
    pub close: char,
}

impl Sentinel {
    pub const PREFERRED: Sentinel = Sentinel {
        open: '⟦',
        close: '⟧',
    };

    /// First candidate pair absent from `text`: the preferred brackets, then
    /// pairs from the BMP and supplementary private use areas.
    pub fn for_text(text: &str) -> Self {
        let private_use = (0xE000u32..0xF8FF)
            .step_by(2)
            .chain((0xF0000u32..0xFFFFD).step_by(2))
            .filter_map(|c| {
                Some(Sentinel {
                    open: char::from_u32(c)?,
                    close: char::from_u32(c + 1)?,
                })
            });

        std::iter::once(Self::PREFERRED)
            .chain(private_use)
            .find(|s| !text.contains(s.open) && !text.contains(s.close))
            .unwrap_or(Self::PREFERRED)
    }

    /// Token for the `ordinal`-th span of category `tag`.
    ///
    /// Tags are upper-case ASCII so that upper-casing text around a token
    /// leaves it intact.
    pub fn token(&self, tag: &str, ordinal: usize) -> String {
        format!("{}{tag}{ordinal}{}", self.open, self.close)
    }
}

/// A span lifted out of the working text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    pub token: String,
    pub original: String,
}

/// The spans protected during one conversion call.
#[derive(Debug, Clone)]
pub struct SpanStore {
    sentinel: Sentinel,
    spans: Vec<ProtectedSpan>,
}

impl SpanStore {
    pub fn new(sentinel: Sentinel) -> Self {
        Self {
            sentinel,
            spans: Vec::new(),
        }
    }

    pub fn sentinel(&self) -> Sentinel {
        self.sentinel
    }

    pub fn spans(&self) -> &[ProtectedSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Records `original` and returns the token that stands in for it.
    pub fn shield(&mut self, tag: &str, original: impl Into<String>) -> String {
        let token = self.sentinel.token(tag, self.spans.len());
        self.spans.push(ProtectedSpan {
            token: token.clone(),
            original: original.into(),
        });
        token
    }

    /// Replaces every match of `pattern` in `text` with a token.
    pub fn shield_matches(&mut self, text: &str, pattern: &Regex, tag: &str) -> String {
        pattern
            .replace_all(text, |caps: &Captures| self.shield(tag, &caps[0]))
            .into_owned()
    }

    /// Substitutes every token back with its original text.
    ///
    /// Works newest-first, so a span whose original contains an older token
    /// is expanded before that older token is looked up.
    pub fn restore(&self, text: &str) -> String {
        let mut out = text.to_string();
        for span in self.spans.iter().rev() {
            out = out.replace(&span.token, &span.original);
        }
        out
    }
}

/// Lifts fenced code blocks, then inline code spans, out of `text`.
pub fn protect(text: &str) -> (String, SpanStore) {
    let mut store = SpanStore::new(Sentinel::for_text(text));
    let masked = store.shield_matches(text, CodeFence::pattern(), CodeFence::TAG);
    let masked = store.shield_matches(&masked, CodeSpan::pattern(), CodeSpan::TAG);
    log::trace!("protected {} code spans", store.len());
    (masked, store)
}

/// Reinserts the code lifted out by [`protect`].
pub fn restore(text: &str, spans: &SpanStore) -> String {
    spans.restore(text)
}
