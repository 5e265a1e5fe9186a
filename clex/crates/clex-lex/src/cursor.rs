//! Character cursor for traversing source text.
//!
//! The cursor is the scanner's only view of the input. It exposes the
//! current character without consuming it, so a recognizer that reads one
//! character past its lexeme simply leaves that character in place for the
//! next recognizer. Longer lookahead is done with [`Cursor::measure_run`],
//! which inspects the upcoming characters without moving the cursor.

/// A cursor over source text with line/column tracking.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), Some('i'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('n'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// Result of measuring a run of characters ahead of the cursor.
///
/// A run is measured, not consumed: the cursor stays where it was until the
/// caller decides to commit with [`Cursor::advance_bytes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Number of characters in the run.
    pub len: usize,
    /// Number of bytes in the run.
    pub bytes: usize,
    /// The first character after the run, or `None` at end of input.
    pub boundary: Option<char>,
}

impl Run {
    /// Returns true if no character was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    ///
    /// End of input is a distinct value, so a literal NUL in the source is
    /// still an ordinary character.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\0");
    /// assert_eq!(cursor.current_char(), Some('\0'));
    /// assert_eq!(Cursor::new("").current_char(), None);
    /// ```
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        self.remaining().chars().next()
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
            self.bump_location(c);
        }
    }

    /// Advances the cursor by `count` bytes, clamped to the end of input.
    ///
    /// Callers normally obtain `count` from [`Run::bytes`]. A count that
    /// ends inside a multi-byte character stops before that character.
    pub fn advance_bytes(&mut self, count: usize) {
        let mut end = self.position.saturating_add(count).min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        for c in self.source[self.position..end].chars() {
            self.bump_location(c);
        }
        self.position = end;
    }

    /// Measures the run of upcoming characters accepted by `accept`.
    ///
    /// `accept` receives the index of the character within the run and the
    /// character itself. At most `limit` characters are accepted when a
    /// limit is given; the character that stopped the run, whether rejected
    /// or cut off by the limit, is reported as [`Run::boundary`].
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc1");
    /// let run = cursor.measure_run(None, |_, c| c.is_ascii_alphabetic());
    /// assert_eq!(run.len, 3);
    /// assert_eq!(run.boundary, Some('1'));
    ///
    /// let capped = cursor.measure_run(Some(2), |_, c| c.is_ascii_alphabetic());
    /// assert_eq!(capped.len, 2);
    /// assert_eq!(capped.boundary, Some('c'));
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn measure_run<F>(&self, limit: Option<usize>, mut accept: F) -> Run
    where
        F: FnMut(usize, char) -> bool,
    {
        let mut len = 0;
        let mut bytes = 0;
        let mut chars = self.remaining().char_indices();

        let boundary = loop {
            match chars.next() {
                Some((offset, c)) if limit.map_or(true, |max| len < max) && accept(len, c) => {
                    len += 1;
                    bytes = offset + c.len_utf8();
                }
                Some((_, c)) => break Some(c),
                None => break None,
            }
        };

        Run {
            len,
            bytes,
            boundary,
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance_bytes(2);
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn bump_location(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
