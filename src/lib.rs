//! pedit - a small terminal text editor built on persistent values.
//!
//! Modules:
//! - models: text model (Document, Line, Coord)
//! - core: frontend-neutral key model
//! - kernel: buffer edits, application state, commands, key dispatch, file
//!   and settings adapters
//! - tui: crossterm/ratatui frontend (feature `tui`)

pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
