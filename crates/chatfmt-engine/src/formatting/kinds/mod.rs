//! Markdown constructs the formatter recognizes.
//!
//! Each construct owns its delimiters and the pattern that finds it, so the
//! pipeline stages never spell out Markdown syntax themselves.

mod block_quote;
mod bullet;
mod code_fence;
mod code_span;
mod emphasis;
mod heading;
mod link;
mod rule;
mod table;

pub use block_quote::BlockQuote;
pub use bullet::Bullet;
pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic, Strike};
pub use heading::Heading;
pub use link::Link;
pub use rule::Rule;
pub use table::{Table, TableModel};
