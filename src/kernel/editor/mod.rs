//! Editor domain: pure transforms over `Buffer` values.

mod buffer;
mod edit;
mod movement;
mod viewport;

pub use buffer::{actual_cursor, actual_display_cursor, selected_region, Buffer};
pub use edit::{
    clear_selection, copy, cut, cut_rest, delete_char, delete_char_right, insert_char,
    insert_new_line, insert_tab, insert_text, select_whole_buffer, start_selection,
};
pub use movement::{
    move_buffer_end, move_buffer_start, move_cursor_down, move_cursor_left, move_cursor_right,
    move_cursor_up, move_line_end, move_line_start, page_down, page_up,
};
pub use viewport::{editor_size, scroll_to_cursor, RESERVED_ROWS};
