//! Headless editor core: buffer transforms, application state, commands and
//! key dispatch.

pub mod command;
pub mod dispatch;
pub mod editor;
pub mod services;
pub mod state;

pub use command::{Command, CommandRegistry, Outcome};
pub use dispatch::{eval_command, eval_insert_char, handle_key};
pub use editor::Buffer;
pub use state::{
    apply_edit, clear_input, paste, put_clipboard, put_message, Application, Edit, Message,
};
