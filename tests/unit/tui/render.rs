use super::*;
use crate::core::{Key, KeyCode};
use crate::kernel::state::put_message;
use crate::models::Document;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app(text: &str) -> Application {
    Application::with_defaults(Buffer::from_text("notes.txt", text))
}

fn text_of(line: &TextLine<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn screen(app: &Application, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[test]
fn tabs_expand_to_tab_stops() {
    let doc = Document::from_text("a\tb");
    let line = visible_line(doc.line(0).unwrap(), 0, 0, 20, None);
    assert_eq!(text_of(&line), "a       b");
}

#[test]
fn horizontal_scroll_and_clipping() {
    let doc = Document::from_text("abcdef\n\tx");
    let line = visible_line(doc.line(0).unwrap(), 0, 2, 3, None);
    assert_eq!(text_of(&line), "cde");

    // A tab cut by the left edge keeps its remaining cells.
    let line = visible_line(doc.line(1).unwrap(), 1, 4, 10, None);
    assert_eq!(text_of(&line), "    x");
}

#[test]
fn selection_is_highlighted() {
    let doc = Document::from_text("abcd");
    let region = Some((Coord::new(0, 1), Coord::new(0, 3)));
    let line = visible_line(doc.line(0).unwrap(), 0, 0, 10, region);

    assert_eq!(line.spans.len(), 3);
    assert_eq!(line.spans[0].content, "a");
    assert_eq!(line.spans[1].content, "bc");
    assert_eq!(line.spans[1].style, SELECTED);
    assert_eq!(line.spans[2].content, "d");
    assert_eq!(line.spans[2].style, Style::default());
}

#[test]
fn selection_on_other_rows_is_ignored() {
    let doc = Document::from_text("abcd");
    let region = Some((Coord::new(3, 0), Coord::new(4, 0)));
    let line = visible_line(doc.line(0).unwrap(), 0, 0, 10, region);
    assert_eq!(line.spans.len(), 1);
}

#[test]
fn status_line_shows_position_and_modified_flag() {
    let mut app = app("hello");
    assert_eq!(status_line(&app), " notes.txt  1:1");

    app.buffer = crate::kernel::editor::insert_char(app.buffer, '!');
    assert_eq!(status_line(&app), " notes.txt [+]  1:2");

    app.input.push(Key::ctrl(KeyCode::Char('x')));
    assert_eq!(status_line(&app), " notes.txt [+]  1:2  C-x");
}

#[test]
fn frame_has_text_status_and_message_rows() {
    let app = put_message(app("one\ntwo"), "saved notes.txt");
    let rows = screen(&app, 20, 5);

    assert_eq!(rows.len(), 5);
    assert!(rows[0].starts_with("one"));
    assert!(rows[1].starts_with("two"));
    assert_eq!(rows[2].trim(), "");
    assert!(rows[3].starts_with(" notes.txt  1:1"));
    assert!(rows[4].starts_with("saved notes.txt"));
}

#[test]
fn frame_draws_from_scroll_offset() {
    let mut app = app("a\nb\nc\nd\ne");
    app.buffer.cursor = Coord::new(4, 0);
    app.buffer.scroll = Coord::new(3, 0);
    let rows = screen(&app, 10, 4);
    assert!(rows[0].starts_with('d'));
    assert!(rows[1].starts_with('e'));
}
