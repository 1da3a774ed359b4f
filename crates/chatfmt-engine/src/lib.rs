//! Converts assistant-style Markdown into text for chat and social
//! platforms, and splits the result into length-bounded chunks.
//!
//! The whole public surface is four pure functions over strings:
//! [`format_for_whatsapp`], [`format_for_linkedin`], [`format_for_instagram`]
//! and [`split_by_max_len`]. None of them can fail; constructs the rewriter
//! does not recognize are passed through verbatim.

pub mod formatting;
pub mod platform;
pub mod splitting;

// Re-export key types for easier usage
pub use formatting::{format_for_instagram, format_for_linkedin, format_for_whatsapp};
pub use platform::{Dialect, Platform, UnknownPlatform, format_for};
pub use splitting::{Chunk, ChunkSplitter, split_by_max_len};
