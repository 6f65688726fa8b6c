//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the editor core has no dependency on
//! terminal crates.

pub mod crossterm;
pub mod render;
pub mod terminal_guard;
