use std::fmt;
use std::sync::Arc;

use crate::models::{display_line_col, Coord, Document, LineEnding};

/// Editable state of one open file. Every transform takes a `Buffer` and
/// returns a new one; the documents inside are shared, not copied.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    pub content: Document,
    pub cursor: Coord,
    /// Top-left corner of the viewport; `col` is a display column.
    pub scroll: Coord,
    pub selection_start: Option<Coord>,
    pub file_name: Arc<str>,
    /// Content as last loaded from or written to disk.
    pub file_content: Document,
    /// Terminator written back on save.
    pub line_ending: LineEnding,
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("file_name", &self.file_name)
            .field("cursor", &self.cursor)
            .field("scroll", &self.scroll)
            .field("selection_start", &self.selection_start)
            .field("lines", &self.content.len_lines())
            .field("modified", &self.is_modified())
            .field("line_ending", &self.line_ending)
            .finish()
    }
}

impl Buffer {
    pub fn new(file_name: impl Into<Arc<str>>, content: Document) -> Self {
        Self {
            file_content: content.clone(),
            content,
            cursor: Coord::ORIGIN,
            scroll: Coord::ORIGIN,
            selection_start: None,
            file_name: file_name.into(),
            line_ending: LineEnding::Lf,
        }
    }

    pub fn from_text(file_name: impl Into<Arc<str>>, text: &str) -> Self {
        Self::new(file_name, Document::from_text(text))
    }

    pub fn is_modified(&self) -> bool {
        self.content != self.file_content
    }

    pub fn has_selection(&self) -> bool {
        self.selection_start.is_some()
    }
}

/// The cursor with its column clamped to the length of its line.
pub fn actual_cursor(buf: &Buffer) -> Coord {
    buf.content.clamp(buf.cursor)
}

/// `actual_cursor` with the column converted to display coordinates.
pub fn actual_display_cursor(buf: &Buffer) -> Coord {
    let cursor = actual_cursor(buf);
    let col = buf
        .content
        .line(cursor.row)
        .map_or(0, |line| display_line_col(line, cursor.col));
    Coord::new(cursor.row, col)
}

/// The selected span as `(min, max)` of the selection start and the cursor,
/// or `None` when no selection is active.
pub fn selected_region(buf: &Buffer) -> Option<(Coord, Coord)> {
    let start = buf.content.clamp(buf.selection_start?);
    let cursor = actual_cursor(buf);
    Some((start.min(cursor), start.max(cursor)))
}
