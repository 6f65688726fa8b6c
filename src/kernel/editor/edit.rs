//! Text edits, selection and clipboard extraction.
//!
//! Insertions and deletions leave the cursor right after the inserted text or
//! at the deletion point, and always drop the selection.

use crate::models::{Coord, Document};

use super::buffer::{actual_cursor, selected_region, Buffer};

pub fn insert_char(buf: Buffer, ch: char) -> Buffer {
    if ch == '\n' {
        return insert_new_line(buf);
    }
    let cur = actual_cursor(&buf);
    Buffer {
        content: buf.content.insert_char(cur, ch),
        cursor: Coord::new(cur.row, cur.col + 1),
        selection_start: None,
        ..buf
    }
}

/// Inserts a literal tab character.
pub fn insert_tab(buf: Buffer) -> Buffer {
    insert_char(buf, '\t')
}

/// Splits the current line at the cursor.
pub fn insert_new_line(buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    Buffer {
        content: buf.content.insert_char(cur, '\n'),
        cursor: Coord::new(cur.row + 1, 0),
        selection_start: None,
        ..buf
    }
}

pub fn insert_text(buf: Buffer, text: &Document) -> Buffer {
    let cur = actual_cursor(&buf);
    let last = text.len_lines() - 1;
    let tail = text.line_len(last);
    let cursor = if last == 0 {
        Coord::new(cur.row, cur.col + tail)
    } else {
        Coord::new(cur.row + last, tail)
    };
    Buffer {
        content: buf.content.insert(cur, text),
        cursor,
        selection_start: None,
        ..buf
    }
}

/// Backspace: removes the character left of the cursor, joining with the
/// previous line at column zero.
pub fn delete_char(buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    let start = if cur.col > 0 {
        Coord::new(cur.row, cur.col - 1)
    } else if cur.row > 0 {
        Coord::new(cur.row - 1, buf.content.line_len(cur.row - 1))
    } else {
        return Buffer {
            cursor: cur,
            selection_start: None,
            ..buf
        };
    };
    Buffer {
        content: buf.content.remove(start, cur),
        cursor: start,
        selection_start: None,
        ..buf
    }
}

/// Delete: removes the character under the cursor, joining with the next
/// line at the end of a line.
pub fn delete_char_right(buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    let end = if cur.col < buf.content.line_len(cur.row) {
        Coord::new(cur.row, cur.col + 1)
    } else if cur.row + 1 < buf.content.len_lines() {
        Coord::new(cur.row + 1, 0)
    } else {
        cur
    };
    Buffer {
        content: buf.content.remove(cur, end),
        cursor: cur,
        selection_start: None,
        ..buf
    }
}

/// Anchors a selection at the cursor. An active selection is kept as is.
pub fn start_selection(mut buf: Buffer) -> Buffer {
    if buf.selection_start.is_none() {
        buf.selection_start = Some(actual_cursor(&buf));
    }
    buf
}

pub fn clear_selection(mut buf: Buffer) -> Buffer {
    buf.selection_start = None;
    buf
}

pub fn select_whole_buffer(mut buf: Buffer) -> Buffer {
    buf.selection_start = Some(Coord::ORIGIN);
    buf.cursor = buf.content.end();
    buf
}

/// Extracts the selected text and drops the selection. Content is untouched.
pub fn copy(mut buf: Buffer) -> (Buffer, Document) {
    let text = match selected_region(&buf) {
        Some((start, end)) => buf.content.slice(start, end),
        None => Document::new(),
    };
    buf.selection_start = None;
    (buf, text)
}

/// Removes the selected text, returning it. The cursor lands on the start of
/// the removed span.
pub fn cut(buf: Buffer) -> (Buffer, Document) {
    let Some((start, end)) = selected_region(&buf) else {
        return (clear_selection(buf), Document::new());
    };
    let text = buf.content.slice(start, end);
    let buf = Buffer {
        content: buf.content.remove(start, end),
        cursor: start,
        selection_start: None,
        ..buf
    };
    (buf, text)
}

/// Kills from the cursor to the end of the line, or the line break itself
/// when the cursor already sits at the end of a line.
pub fn cut_rest(mut buf: Buffer) -> (Buffer, Document) {
    let cur = actual_cursor(&buf);
    let len = buf.content.line_len(cur.row);
    let end = if cur.col < len {
        Coord::new(cur.row, len)
    } else if cur.row + 1 < buf.content.len_lines() {
        Coord::new(cur.row + 1, 0)
    } else {
        return (clear_selection(buf), Document::new());
    };
    buf.selection_start = Some(cur);
    buf.cursor = end;
    cut(buf)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/edit.rs"]
mod tests;
