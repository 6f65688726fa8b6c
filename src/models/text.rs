//! Persistent text model.
//!
//! `Document` wraps a `Rope`. Cloning a rope only bumps a reference count and
//! an edit on the clone copies the nodes along the edited path, so every
//! operation here returns a new value while the receiver stays intact.
//! Only `'\n'` separates lines.

use ropey::{Rope, RopeSlice};
use std::fmt;
use std::io::{self, Write};

use super::coord::{ordered, Coord};

/// Display width of a tab stop.
pub const TAB_WIDTH: usize = 8;

/// Line terminator used on disk. In memory lines are always split on `'\n'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// `CrLf` only when every line break in `text` is `"\r\n"`. Mixed text
    /// counts as `Lf` and keeps its stray `'\r'`s as ordinary characters.
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut breaks = bytes.iter().enumerate().filter(|&(_, &b)| b == b'\n');
        let mut any = false;
        let all_crlf = breaks.all(|(i, _)| {
            any = true;
            i > 0 && bytes[i - 1] == b'\r'
        });
        if any && all_crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// A document with a single empty line.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::from_text(&text)
    }

    /// Number of lines, always at least one.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the document holds no characters (a single empty line).
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line(&self, row: usize) -> Option<Line<'_>> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(row);
        let len = slice.len_chars();
        let slice = if len > 0 && slice.char(len - 1) == '\n' {
            slice.slice(..len - 1)
        } else {
            slice
        };
        Some(Line { slice })
    }

    /// Length of `row` in characters, excluding the line break. Zero past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, |line| line.len())
    }

    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        (0..self.len_lines()).filter_map(move |row| self.line(row))
    }

    /// Position just after the last character.
    pub fn end(&self) -> Coord {
        let row = self.len_lines() - 1;
        Coord::new(row, self.line_len(row))
    }

    /// Clamps `pos` onto an existing row and a column within that row.
    pub fn clamp(&self, pos: Coord) -> Coord {
        let row = pos.row.min(self.len_lines() - 1);
        Coord::new(row, pos.col.min(self.line_len(row)))
    }

    pub fn char_index(&self, pos: Coord) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.row) + pos.col
    }

    pub fn insert_char(&self, pos: Coord, ch: char) -> Self {
        let idx = self.char_index(pos);
        let mut rope = self.rope.clone();
        rope.insert_char(idx, ch);
        Self { rope }
    }

    /// Splices `text` in at `pos`. The first line of `text` joins the line at
    /// `pos`, its last line takes the remainder of that line.
    pub fn insert(&self, pos: Coord, text: &Document) -> Self {
        let idx = self.char_index(pos);
        let mut rope = self.rope.clone();
        let tail = rope.split_off(idx);
        rope.append(text.rope.clone());
        rope.append(tail);
        Self { rope }
    }

    /// Removes the characters between two positions (in either order).
    pub fn remove(&self, a: Coord, b: Coord) -> Self {
        let (start, end) = self.span(a, b);
        if start == end {
            return self.clone();
        }
        let mut rope = self.rope.clone();
        rope.remove(start..end);
        Self { rope }
    }

    /// Extracts the characters between two positions as a new document.
    pub fn slice(&self, a: Coord, b: Coord) -> Self {
        let (start, end) = self.span(a, b);
        let mut rope = self.rope.clone();
        rope.split_off(end);
        Self {
            rope: rope.split_off(start),
        }
    }

    /// Concatenation: the last line of `self` joins the first line of `other`.
    pub fn append(&self, other: &Document) -> Self {
        let mut rope = self.rope.clone();
        rope.append(other.rope.clone());
        Self { rope }
    }

    /// Inserts `text` as a new line before `row`; `row >= len_lines()` appends it.
    pub fn insert_line(&self, row: usize, text: &str) -> Self {
        let mut rope = self.rope.clone();
        if row >= rope.len_lines() {
            let end = rope.len_chars();
            rope.insert(end, text);
            rope.insert_char(end, '\n');
        } else {
            let idx = rope.line_to_char(row);
            rope.insert_char(idx, '\n');
            rope.insert(idx, text);
        }
        Self { rope }
    }

    /// Removes `row` together with one adjacent line break. Removing the only
    /// line leaves a single empty line.
    pub fn remove_line(&self, row: usize) -> Self {
        let lines = self.len_lines();
        if row >= lines {
            return self.clone();
        }
        let mut rope = self.rope.clone();
        if row + 1 < lines {
            let start = rope.line_to_char(row);
            let end = rope.line_to_char(row + 1);
            rope.remove(start..end);
        } else if row > 0 {
            let start = rope.line_to_char(row) - 1;
            let end = rope.len_chars();
            rope.remove(start..end);
        } else {
            return Self::new();
        }
        Self { rope }
    }

    /// Streams the text to `writer` chunk by chunk, terminating lines with
    /// `ending`.
    pub fn write_to<W: Write>(&self, writer: &mut W, ending: LineEnding) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            match ending {
                LineEnding::Lf => writer.write_all(chunk.as_bytes())?,
                LineEnding::CrLf => {
                    let mut parts = chunk.split('\n');
                    if let Some(first) = parts.next() {
                        writer.write_all(first.as_bytes())?;
                    }
                    for part in parts {
                        writer.write_all(ending.as_str().as_bytes())?;
                        writer.write_all(part.as_bytes())?;
                    }
                }
            }
        }
        Ok(())
    }

    fn span(&self, a: Coord, b: Coord) -> (usize, usize) {
        let (a, b) = ordered(a, b);
        (self.char_index(a), self.char_index(b))
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.lines().map(|line| line.to_string()))
            .finish()
    }
}

/// One line of a `Document`, without its line break.
#[derive(Clone, Copy)]
pub struct Line<'a> {
    slice: RopeSlice<'a>,
}

impl<'a> Line<'a> {
    pub fn len(&self) -> usize {
        self.slice.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.len_chars() == 0
    }

    pub fn char(&self, col: usize) -> Option<char> {
        (col < self.len()).then(|| self.slice.char(col))
    }

    pub fn chars(&self) -> ropey::iter::Chars<'a> {
        self.slice.chars()
    }

    pub fn as_slice(&self) -> RopeSlice<'a> {
        self.slice
    }

    pub fn display_col(&self, col: usize) -> usize {
        display_line_col(*self, col)
    }

    pub fn logical_col(&self, dcol: usize) -> usize {
        line_col(*self, dcol)
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.slice, f)
    }
}

impl fmt::Debug for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

impl PartialEq<&str> for Line<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.slice == *other
    }
}

fn advance(dcol: usize, ch: char) -> usize {
    if ch == '\t' {
        dcol + TAB_WIDTH - dcol % TAB_WIDTH
    } else {
        dcol + 1
    }
}

/// Display column of logical column `col`: tabs before `col` expand to the
/// next multiple of `TAB_WIDTH`.
pub fn display_line_col(line: Line<'_>, col: usize) -> usize {
    line.chars().take(col).fold(0, advance)
}

/// Inverse of `display_line_col`: the largest logical column whose display
/// column does not exceed `dcol`, clamped to the line length.
pub fn line_col(line: Line<'_>, dcol: usize) -> usize {
    let mut cur = 0;
    for (col, ch) in line.chars().enumerate() {
        let next = advance(cur, ch);
        if next > dcol {
            return col;
        }
        cur = next;
    }
    line.len()
}

#[cfg(test)]
#[path = "../../tests/unit/models/text.rs"]
mod tests;
