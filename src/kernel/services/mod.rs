//! Services the kernel consumes: key bindings, file IO and settings.

pub mod adapters;
pub mod ports;

pub use adapters::{load_file, save_file, FileError, KeyMap, KeyMatch};
pub use ports::{KeybindingRule, Settings};
