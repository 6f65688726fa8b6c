//! Service adapters: OS specific implementations (files, settings, paths).

pub mod file;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use file::{load_file, save_file, FileError};
pub use keybinding::{KeyMap, KeyMatch};
pub use paths::{ensure_log_dir, get_config_dir, get_log_dir};
pub use settings::{
    apply_keybindings, get_settings_path, load_settings, load_settings_from, parse_key,
    parse_key_sequence,
};
