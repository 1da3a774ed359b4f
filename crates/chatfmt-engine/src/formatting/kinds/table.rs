use regex::Regex;
use std::sync::OnceLock;

/// Pipe table syntax.
///
/// A table starts at a pipe-bounded header line immediately followed by a
/// separator line, and runs over every following pipe-bounded line.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A line of the form `|...|`.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// A pipe-bounded line made only of hyphens, colons, pipes and spaces.
    ///
    /// Column alignment syntax is not validated: `|:-:-|` or a separator
    /// with a different column count than the header still counts.
    pub fn is_separator(line: &str) -> bool {
        static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
        SEPARATOR_REGEX
            .get_or_init(|| {
                Regex::new(r"^\|[\s:|-]*-[\s:|-]*\|$").expect("Invalid table separator regex")
            })
            .is_match(line.trim())
    }

    /// Splits a row into trimmed cells, keeping empty cells in position.
    pub fn cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(|c| c.trim().to_string()).collect()
    }
}

/// A scanned table, held only long enough to be flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Flattens the table into `Header: value` lines, one group per row,
    /// each group followed by a blank line.
    ///
    /// Cells are paired with headers by position: missing cells are not
    /// padded, extra cells are dropped and empty cells emit nothing. A
    /// table without data rows becomes a single blank line.
    pub fn render_lines(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return vec![String::new()];
        }

        let mut lines = Vec::new();
        for row in &self.rows {
            for (header, value) in self.headers.iter().zip(row) {
                if value.is_empty() {
                    continue;
                }
                if header.is_empty() {
                    lines.push(value.clone());
                } else {
                    lines.push(format!("{header}: {value}"));
                }
            }
            lines.push(String::new());
        }
        lines
    }
}
