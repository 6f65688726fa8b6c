//! Data models: positions and the persistent text model.

pub mod coord;
pub mod text;

pub use coord::{ordered, Coord};
pub use text::{display_line_col, line_col, Document, Line, LineEnding, TAB_WIDTH};
