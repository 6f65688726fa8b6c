//! Commands: named state transitions invoked from key bindings.
//!
//! A command maps `(Application, viewport size)` to an `Outcome`. The
//! adapters below lift plain buffer transforms into that shape.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use crate::models::{Coord, Document};

use super::editor::{self, scroll_to_cursor, Buffer};
use super::services::save_file;
use super::state::{apply_edit, paste, put_message, Application};

/// Result of running a command or handling a key.
#[derive(Debug, Clone)]
pub enum Outcome {
    Continue(Application),
    /// The editor should shut down.
    Terminate,
}

impl Outcome {
    pub fn is_terminate(&self) -> bool {
        matches!(self, Outcome::Terminate)
    }

    pub fn into_app(self) -> Option<Application> {
        match self {
            Outcome::Continue(app) => Some(app),
            Outcome::Terminate => None,
        }
    }
}

pub type Command = Arc<dyn Fn(Application, Coord) -> Outcome + Send + Sync>;

/// Lifts a buffer transform; the result goes through `apply_edit`.
pub fn edit_command<F>(f: F) -> Command
where
    F: Fn(Buffer) -> Buffer + Send + Sync + 'static,
{
    Arc::new(move |app: Application, size: Coord| {
        let buffer = f(app.buffer.clone());
        Outcome::Continue(apply_edit(app, size, buffer))
    })
}

/// Lifts a transform that also extracts text for the clipboard.
pub fn clip_command<F>(f: F) -> Command
where
    F: Fn(Buffer) -> (Buffer, Document) + Send + Sync + 'static,
{
    Arc::new(move |app: Application, size: Coord| {
        let edit = f(app.buffer.clone());
        Outcome::Continue(apply_edit(app, size, edit))
    })
}

/// Lifts a transform that needs the viewport size (paging).
pub fn scroll_command<F>(f: F) -> Command
where
    F: Fn(Buffer, Coord) -> Buffer + Send + Sync + 'static,
{
    Arc::new(move |mut app: Application, size: Coord| {
        let buffer = f(app.buffer.clone(), size);
        app.buffer = scroll_to_cursor(buffer, size);
        Outcome::Continue(app)
    })
}

pub fn paste_command() -> Command {
    Arc::new(|app: Application, size: Coord| Outcome::Continue(paste(app, size)))
}

pub fn quit_command() -> Command {
    Arc::new(|_: Application, _: Coord| Outcome::Terminate)
}

pub fn save_command() -> Command {
    Arc::new(|app: Application, _: Coord| {
        let app = match save_file(&app.buffer) {
            Ok(buffer) => {
                let message = format!("saved {}", buffer.file_name);
                put_message(Application { buffer, ..app }, message)
            }
            Err(err) => {
                tracing::error!(file = %app.buffer.file_name, error = %err, "save failed");
                let message = format!("error saving {}: {}", app.buffer.file_name, err);
                put_message(app, message)
            }
        };
        Outcome::Continue(app)
    })
}

/// Command name → command.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: FxHashMap<String, Command>,
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.commands.reserve(24);

        registry.register("move-up", edit_command(editor::move_cursor_up));
        registry.register("move-down", edit_command(editor::move_cursor_down));
        registry.register("move-left", edit_command(editor::move_cursor_left));
        registry.register("move-right", edit_command(editor::move_cursor_right));
        registry.register("move-beginning-of-line", edit_command(editor::move_line_start));
        registry.register("move-end-of-line", edit_command(editor::move_line_end));
        registry.register("beginning-of-buffer", edit_command(editor::move_buffer_start));
        registry.register("end-of-buffer", edit_command(editor::move_buffer_end));
        registry.register("page-up", scroll_command(editor::page_up));
        registry.register("page-down", scroll_command(editor::page_down));

        registry.register("new-line", edit_command(editor::insert_new_line));
        registry.register("insert-tab", edit_command(editor::insert_tab));
        registry.register("delete-char", edit_command(editor::delete_char));
        registry.register("delete-char-right", edit_command(editor::delete_char_right));

        registry.register("kill-line", clip_command(editor::cut_rest));
        registry.register("copy", clip_command(editor::copy));
        registry.register("cut", clip_command(editor::cut));
        registry.register("paste", paste_command());

        registry.register("start-selection", edit_command(editor::start_selection));
        registry.register("clear-selection", edit_command(editor::clear_selection));
        registry.register("select-whole-buffer", edit_command(editor::select_whole_buffer));

        registry.register("save", save_command());
        registry.register("quit", quit_command());

        registry
    }

    pub fn register(&mut self, name: impl Into<String>, command: Command) {
        self.commands.insert(name.into(), command);
    }

    pub fn get(&self, name: &str) -> Option<Command> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/command.rs"]
mod tests;
