//! Block-level cleanup shared by every dialect: rules, blockquotes, links
//! and pipe tables.

use super::kinds::{BlockQuote, Link, Rule, Table, TableModel};
use super::protect::SpanStore;

/// Runs every structural rewrite, in order.
///
/// Link URLs are shielded in `spans` and come back with the protected code.
pub fn clean(text: &str, spans: &mut SpanStore) -> String {
    let text = strip_block_quotes(text);
    let text = replace_rules(&text);
    let text = inline_links(&text, spans);
    flatten_tables(&text)
}

pub fn replace_rules(text: &str) -> String {
    Rule::pattern()
        .replace_all(text, Rule::SEPARATOR)
        .into_owned()
}

/// Removes one leading `>` per line.
pub fn strip_block_quotes(text: &str) -> String {
    BlockQuote::pattern().replace_all(text, "").into_owned()
}

/// `[text](https://url)` becomes `text (https://url)`.
///
/// The URL is left as a token so later case and emphasis rewrites cannot
/// alter it.
pub fn inline_links(text: &str, spans: &mut SpanStore) -> String {
    Link::pattern()
        .replace_all(text, |caps: &regex::Captures| {
            let url = spans.shield(Link::TAG, &caps[2]);
            Link::render(&caps[1], &url)
        })
        .into_owned()
}

/// Replaces each pipe table with `Header: value` lines. Every other line is
/// passed through in place.
pub fn flatten_tables(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut tables = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let opens_table = Table::is_row(line)
            && lines
                .get(i + 1)
                .is_some_and(|next| Table::is_separator(next));

        if !opens_table {
            out.push(line.to_string());
            i += 1;
            continue;
        }

        let mut table = TableModel::new(Table::cells(line));
        i += 2;
        while i < lines.len() && Table::is_row(lines[i]) {
            table.push_row(Table::cells(lines[i]));
            i += 1;
        }
        out.extend(table.render_lines());
        tables += 1;
    }

    if tables > 0 {
        log::debug!("flattened {tables} table(s)");
    }
    out.join("\n")
}
