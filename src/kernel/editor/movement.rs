//! Cursor movement. None of these touch `scroll`; callers follow up with
//! `scroll_to_cursor`. Moving past a document boundary returns the buffer
//! unchanged.

use crate::models::{line_col, Coord};

use super::buffer::{actual_cursor, actual_display_cursor, Buffer};

/// Moves to `row`, keeping the display column of the cursor where the
/// destination line allows it.
fn move_to_row(mut buf: Buffer, row: usize) -> Buffer {
    let dcol = actual_display_cursor(&buf).col;
    let col = buf.content.line(row).map_or(0, |line| line_col(line, dcol));
    buf.cursor = Coord::new(row, col);
    buf
}

pub fn move_cursor_up(buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    if cur.row == 0 {
        return buf;
    }
    move_to_row(buf, cur.row - 1)
}

pub fn move_cursor_down(buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    if cur.row + 1 >= buf.content.len_lines() {
        return buf;
    }
    move_to_row(buf, cur.row + 1)
}

pub fn move_cursor_left(mut buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    if cur.col > 0 {
        buf.cursor = Coord::new(cur.row, cur.col - 1);
    } else if cur.row > 0 {
        let row = cur.row - 1;
        buf.cursor = Coord::new(row, buf.content.line_len(row));
    }
    buf
}

pub fn move_cursor_right(mut buf: Buffer) -> Buffer {
    let cur = actual_cursor(&buf);
    if cur.col < buf.content.line_len(cur.row) {
        buf.cursor = Coord::new(cur.row, cur.col + 1);
    } else if cur.row + 1 < buf.content.len_lines() {
        buf.cursor = Coord::new(cur.row + 1, 0);
    }
    buf
}

pub fn move_line_start(mut buf: Buffer) -> Buffer {
    buf.cursor = Coord::new(actual_cursor(&buf).row, 0);
    buf
}

pub fn move_line_end(mut buf: Buffer) -> Buffer {
    let row = actual_cursor(&buf).row;
    buf.cursor = Coord::new(row, buf.content.line_len(row));
    buf
}

pub fn move_buffer_start(mut buf: Buffer) -> Buffer {
    buf.cursor = Coord::ORIGIN;
    buf
}

pub fn move_buffer_end(mut buf: Buffer) -> Buffer {
    buf.cursor = buf.content.end();
    buf
}

/// Scrolls one screen up and keeps the cursor inside the new screen. At the
/// top of the document the cursor goes to the first line.
pub fn page_up(mut buf: Buffer, size: Coord) -> Buffer {
    let rows = size.row.max(1);
    let cur = actual_cursor(&buf);
    if buf.scroll.row > 0 {
        buf.scroll.row = buf.scroll.row.saturating_sub(rows);
        let bottom = buf.scroll.row + rows - 1;
        if cur.row > bottom {
            return move_to_row(buf, bottom);
        }
        buf
    } else if cur.row > 0 {
        move_to_row(buf, 0)
    } else {
        buf
    }
}

/// Scrolls one screen down and keeps the cursor inside the new screen. When
/// the last line is already visible the cursor goes to the last line.
pub fn page_down(mut buf: Buffer, size: Coord) -> Buffer {
    let rows = size.row.max(1);
    let last = buf.content.len_lines() - 1;
    let cur = actual_cursor(&buf);
    if buf.scroll.row + rows <= last {
        buf.scroll.row += rows;
        if cur.row < buf.scroll.row {
            let top = buf.scroll.row;
            return move_to_row(buf, top);
        }
        buf
    } else if cur.row < last {
        move_to_row(buf, last)
    } else {
        buf
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/movement.rs"]
mod tests;
