/// A cursor for character-by-character scanning of a line-oriented string.
///
/// Positions are byte indices into `s` and always sit on a `char` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    /// Peeks at the character after the current one.
    pub fn peek_next(&self) -> Option<char> {
        self.s[self.i..].chars().nth(1)
    }

    /// The character just before the cursor, or `None` at the start of a
    /// line (or of the string).
    pub fn prev_in_line(&self) -> Option<char> {
        self.s[..self.i].chars().next_back().filter(|&c| c != '\n')
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Byte index of the next `target` on the current line, searching from
    /// the cursor.
    pub fn find_in_line(&self, target: char) -> Option<usize> {
        self.s[self.i..]
            .char_indices()
            .take_while(|&(_, c)| c != '\n')
            .find(|&(_, c)| c == target)
            .map(|(offset, _)| self.i + offset)
    }
}
