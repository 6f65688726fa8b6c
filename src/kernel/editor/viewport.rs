use crate::models::Coord;

use super::buffer::{actual_display_cursor, Buffer};

/// Rows taken by the status line and the message line.
pub const RESERVED_ROWS: usize = 2;

fn follow(offset: usize, pos: usize, extent: usize) -> usize {
    let extent = extent.max(1);
    if pos < offset {
        pos
    } else if pos >= offset + extent {
        pos + 1 - extent
    } else {
        offset
    }
}

/// Moves `scroll` by the least amount that brings the display cursor inside
/// a `size` viewport. Rows and columns are adjusted independently.
pub fn scroll_to_cursor(mut buf: Buffer, size: Coord) -> Buffer {
    let cursor = actual_display_cursor(&buf);
    buf.scroll = Coord::new(
        follow(buf.scroll.row, cursor.row, size.row),
        follow(buf.scroll.col, cursor.col, size.col),
    );
    buf
}

/// Area available to the text, given the whole window size.
pub fn editor_size(size: Coord) -> Coord {
    Coord::new(size.row.saturating_sub(RESERVED_ROWS), size.col)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/viewport.rs"]
mod tests;
