//! Paragraph-aware splitting of rendered text into length-bounded chunks.
//!
//! Lengths are counted in `char`s. Paragraphs (blocks separated by blank
//! lines) are packed greedily; only a paragraph longer than the budget on
//! its own is cut, at fixed character offsets. Slices that hold nothing but
//! whitespace are dropped.

use regex::Regex;
use std::sync::OnceLock;

use crate::formatting::normalize::normalize_line_endings;

/// One piece of output, ready to paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
}

impl Chunk {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Splits text into chunks of at most `max_len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSplitter {
    max_len: usize,
}

impl ChunkSplitter {
    /// Separator placed between blocks packed into the same chunk.
    pub const BLOCK_SEPARATOR: &'static str = "\n\n";

    /// A `max_len` of zero disables splitting.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Splits `text`. The result is never empty: blank input yields a single
    /// empty chunk.
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let normalized = normalize_line_endings(text);
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return vec![Chunk::new("")];
        }
        if self.max_len == 0 {
            return vec![Chunk::new(trimmed)];
        }

        let mut chunks = Vec::new();
        let mut acc = Accumulator::default();

        for block in block_breaks().split(trimmed) {
            let block_len = char_len(block);
            if acc.len_with(block_len) <= self.max_len {
                acc.push(block, block_len);
                continue;
            }

            acc.flush_into(&mut chunks);
            if block_len <= self.max_len {
                acc.push(block, block_len);
            } else {
                let rest = self.hard_slice(block, &mut chunks);
                if !rest.trim().is_empty() {
                    acc.push(rest, char_len(rest));
                }
            }
        }
        acc.flush_into(&mut chunks);

        if chunks.is_empty() {
            chunks.push(Chunk::new(trimmed));
        }
        log::debug!(
            "split {} chars into {} chunk(s) of at most {}",
            char_len(trimmed),
            chunks.len(),
            self.max_len
        );
        chunks
    }

    /// Pushes `max_len`-sized pieces of `block` and returns the remainder,
    /// which is at most `max_len` characters long. Blank pieces are skipped.
    fn hard_slice<'a>(&self, block: &'a str, chunks: &mut Vec<Chunk>) -> &'a str {
        let mut rest = block;
        let mut remaining = char_len(block);
        while remaining > self.max_len {
            let cut = rest
                .char_indices()
                .nth(self.max_len)
                .map_or(rest.len(), |(i, _)| i);
            let piece = &rest[..cut];
            if !piece.trim().is_empty() {
                chunks.push(Chunk::new(piece));
            }
            rest = &rest[cut..];
            remaining -= self.max_len;
        }
        rest
    }
}

/// The chunk being packed.
#[derive(Default)]
struct Accumulator {
    text: String,
    len: usize,
}

impl Accumulator {
    /// Length after appending a block of `block_len` characters.
    fn len_with(&self, block_len: usize) -> usize {
        if self.text.is_empty() {
            block_len
        } else {
            self.len + ChunkSplitter::BLOCK_SEPARATOR.len() + block_len
        }
    }

    fn push(&mut self, block: &str, block_len: usize) {
        self.len = self.len_with(block_len);
        if !self.text.is_empty() {
            self.text.push_str(ChunkSplitter::BLOCK_SEPARATOR);
        }
        self.text.push_str(block);
    }

    /// Emits the accumulated text, unless it is blank, and resets.
    fn flush_into(&mut self, chunks: &mut Vec<Chunk>) {
        let acc = std::mem::take(self);
        if !acc.text.trim().is_empty() {
            chunks.push(Chunk::new(acc.text.trim_end()));
        }
    }
}

/// Blank-line runs between blocks; whitespace-only lines count as blank.
fn block_breaks() -> &'static Regex {
    static BLOCK_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
    BLOCK_BREAK_REGEX
        .get_or_init(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("Invalid block break regex"))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Splits rendered text into chunks of at most `max_len` characters.
/// A `max_len` of zero returns the whole trimmed text as one chunk.
pub fn split_by_max_len(text: &str, max_len: usize) -> Vec<String> {
    ChunkSplitter::new(max_len)
        .split(text)
        .into_iter()
        .map(|c| c.text)
        .collect()
}
