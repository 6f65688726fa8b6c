use super::*;

fn buffer(text: &str, cursor: Coord) -> Buffer {
    Buffer {
        cursor,
        ..Buffer::from_text("test.txt", text)
    }
}

fn numbered(lines: usize) -> String {
    (0..lines)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn horizontal_movement_wraps_at_line_edges() {
    let buf = buffer("ab\ncd", Coord::new(0, 2));
    let buf = move_cursor_right(buf);
    assert_eq!(buf.cursor, Coord::new(1, 0));
    let buf = move_cursor_left(buf);
    assert_eq!(buf.cursor, Coord::new(0, 2));
}

#[test]
fn movement_at_document_edges_is_a_no_op() {
    let start = buffer("ab\ncd", Coord::ORIGIN);
    assert_eq!(move_cursor_left(start.clone()), start);
    assert_eq!(move_cursor_up(start.clone()), start);

    let end = buffer("ab\ncd", Coord::new(1, 2));
    assert_eq!(move_cursor_right(end.clone()), end);
    assert_eq!(move_cursor_down(end.clone()), end);
}

#[test]
fn left_from_a_stale_column_starts_at_line_end() {
    let buf = buffer("abc", Coord::new(0, 10));
    assert_eq!(move_cursor_left(buf).cursor, Coord::new(0, 2));
}

#[test]
fn vertical_movement_keeps_display_column() {
    let buf = buffer("\tx\nabcdefghij", Coord::new(1, 9));
    let up = move_cursor_up(buf);
    // Display column 9 is just past the 'x' after the tab.
    assert_eq!(up.cursor, Coord::new(0, 2));

    let buf = buffer("\tx\nabcdefghij", Coord::new(0, 1));
    let down = move_cursor_down(buf);
    assert_eq!(down.cursor, Coord::new(1, 8));
}

#[test]
fn vertical_movement_falls_back_to_line_end() {
    let buf = buffer("abcdef\nab\nabcdef", Coord::new(0, 5));
    let buf = move_cursor_down(buf);
    assert_eq!(buf.cursor, Coord::new(1, 2));
}

#[test]
fn line_and_buffer_jumps() {
    let buf = buffer("abc\ndefg", Coord::new(1, 2));
    assert_eq!(move_line_start(buf.clone()).cursor, Coord::new(1, 0));
    assert_eq!(move_line_end(buf.clone()).cursor, Coord::new(1, 4));
    assert_eq!(move_buffer_start(buf.clone()).cursor, Coord::ORIGIN);
    assert_eq!(move_buffer_end(buf).cursor, Coord::new(1, 4));
}

#[test]
fn movement_does_not_scroll() {
    let buf = buffer(&numbered(50), Coord::ORIGIN);
    assert_eq!(move_buffer_end(buf).scroll, Coord::ORIGIN);
}

#[test]
fn page_down_scrolls_one_screen() {
    let buf = buffer(&numbered(10), Coord::ORIGIN);
    let buf = page_down(buf, Coord::new(3, 80));
    assert_eq!(buf.scroll.row, 3);
    assert_eq!(buf.cursor, Coord::new(3, 0));
}

#[test]
fn page_down_near_the_end_moves_to_last_line() {
    let mut buf = buffer(&numbered(10), Coord::new(8, 0));
    buf.scroll = Coord::new(7, 0);
    let buf = page_down(buf, Coord::new(3, 80));
    assert_eq!(buf.scroll.row, 7);
    assert_eq!(buf.cursor, Coord::new(9, 0));
}

#[test]
fn page_up_keeps_cursor_on_screen() {
    let mut buf = buffer(&numbered(10), Coord::new(8, 0));
    buf.scroll = Coord::new(6, 0);
    let buf = page_up(buf, Coord::new(3, 80));
    assert_eq!(buf.scroll.row, 3);
    assert_eq!(buf.cursor, Coord::new(5, 0));
}

#[test]
fn page_up_at_top_moves_to_first_line() {
    let buf = buffer(&numbered(10), Coord::new(2, 0));
    let buf = page_up(buf, Coord::new(3, 80));
    assert_eq!(buf.cursor, Coord::ORIGIN);
    assert_eq!(buf.scroll, Coord::ORIGIN);
}

#[test]
fn random_walk_stays_inside_document() {
    let moves: [fn(Buffer) -> Buffer; 8] = [
        move_cursor_up,
        move_cursor_down,
        move_cursor_left,
        move_cursor_right,
        move_line_start,
        move_line_end,
        move_buffer_start,
        move_buffer_end,
    ];
    let mut buf = buffer("a\tb\n\nlonger line here\nx", Coord::ORIGIN);
    let mut seed = 7usize;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
        buf = moves[seed % moves.len()](buf);
        let cur = buf.cursor;
        assert!(cur.row < buf.content.len_lines());
        assert!(cur.col <= buf.content.line_len(cur.row));
    }
}
