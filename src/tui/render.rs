//! Draws an `Application` into a ratatui frame.
//!
//! Layout, top to bottom: text area, status line, message line. The two
//! bottom rows are the ones `editor_size` reserves.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::core::describe_keys;
use crate::kernel::editor::{actual_display_cursor, selected_region, Buffer};
use crate::kernel::Application;
use crate::models::{Coord, Line, TAB_WIDTH};

const SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);
const STATUS: Style = Style::new().add_modifier(Modifier::REVERSED);

pub fn render(frame: &mut Frame, app: &Application) {
    let [text_area, status_area, message_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_text(frame, &app.buffer, text_area);
    frame.render_widget(
        Paragraph::new(status_line(app)).style(STATUS),
        status_area,
    );
    if let Some(message) = app.last_message() {
        frame.render_widget(Paragraph::new(message.content.as_ref()), message_area);
    }

    let cursor = actual_display_cursor(&app.buffer);
    let scroll = app.buffer.scroll;
    if cursor.row >= scroll.row && cursor.col >= scroll.col {
        let y = cursor.row - scroll.row;
        let x = cursor.col - scroll.col;
        if y < text_area.height as usize && x < text_area.width as usize {
            frame.set_cursor_position((text_area.x + x as u16, text_area.y + y as u16));
        }
    }
}

fn render_text(frame: &mut Frame, buf: &Buffer, area: Rect) {
    let region = selected_region(buf);
    let lines: Vec<TextLine<'static>> = (buf.scroll.row..)
        .take(area.height as usize)
        .map_while(|row| buf.content.line(row).map(|line| (row, line)))
        .map(|(row, line)| visible_line(line, row, buf.scroll.col, area.width as usize, region))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// The part of `line` visible from display column `left` on, `width` cells
/// wide, with tabs expanded and selected characters highlighted.
pub fn visible_line(
    line: Line<'_>,
    row: usize,
    left: usize,
    width: usize,
    region: Option<(Coord, Coord)>,
) -> TextLine<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_selected = false;
    let mut dcol = 0;
    let mut used = 0;

    for (col, ch) in line.chars().enumerate() {
        let next = if ch == '\t' {
            dcol + TAB_WIDTH - dcol % TAB_WIDTH
        } else {
            dcol + 1
        };
        let start = dcol;
        dcol = next;
        if next <= left {
            continue;
        }

        let (glyph, cells) = if ch == '\t' {
            (' ', next - start.max(left))
        } else {
            match ch.width() {
                Some(w) if w > 0 => (ch, w),
                _ => ('?', 1),
            }
        };
        if used + cells > width {
            break;
        }
        used += cells;

        let selected = region.is_some_and(|(a, b)| {
            let pos = Coord::new(row, col);
            a <= pos && pos < b
        });
        if selected != run_selected && !run.is_empty() {
            spans.push(styled(std::mem::take(&mut run), run_selected));
        }
        run_selected = selected;
        if ch == '\t' {
            run.extend(std::iter::repeat(glyph).take(cells));
        } else {
            run.push(glyph);
        }
    }
    if !run.is_empty() {
        spans.push(styled(run, run_selected));
    }
    TextLine::from(spans)
}

fn styled(text: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(text, SELECTED)
    } else {
        Span::raw(text)
    }
}

/// `name [+]  row:col  pending-keys`, 1-based position.
pub fn status_line(app: &Application) -> String {
    let buf = &app.buffer;
    let cursor = buf.content.clamp(buf.cursor);
    let mut status = format!(" {}", buf.file_name);
    if buf.is_modified() {
        status.push_str(" [+]");
    }
    status.push_str(&format!("  {}:{}", cursor.row + 1, cursor.col + 1));
    if !app.input.is_empty() {
        status.push_str("  ");
        status.push_str(&describe_keys(&app.input));
    }
    status
}

#[cfg(test)]
#[path = "../../tests/unit/tui/render.rs"]
mod tests;
