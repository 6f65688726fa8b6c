//! Top-level editor state and the functions that fold edits into it.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{describe_keys, Key};
use crate::models::{Coord, Document};

use super::command::CommandRegistry;
use super::editor::{insert_text, scroll_to_cursor, Buffer};
use super::services::KeyMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Seconds since the Unix epoch.
    pub time_stamp: i64,
    pub content: Arc<str>,
}

#[derive(Clone)]
pub struct Application {
    pub buffer: Buffer,
    pub keys: Arc<KeyMap>,
    pub commands: Arc<CommandRegistry>,
    /// Keys typed so far that form a proper prefix of some binding.
    pub input: Vec<Key>,
    /// Cut/copied text; the last entry is the one pasted.
    pub clipboard: Vec<Document>,
    pub messages: Vec<Message>,
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("buffer", &self.buffer)
            .field("input", &describe_keys(&self.input))
            .field("clipboard", &self.clipboard.len())
            .field("messages", &self.messages.len())
            .finish()
    }
}

impl Application {
    pub fn new(buffer: Buffer, keys: Arc<KeyMap>, commands: Arc<CommandRegistry>) -> Self {
        Self {
            buffer,
            keys,
            commands,
            input: Vec::new(),
            clipboard: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Application with the built-in key map and command set.
    pub fn with_defaults(buffer: Buffer) -> Self {
        Self::new(
            buffer,
            Arc::new(KeyMap::with_defaults()),
            Arc::new(CommandRegistry::with_defaults()),
        )
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Shapes of edit result that `apply_edit` knows how to fold in.
#[derive(Debug, Clone)]
pub enum Edit {
    Buffer(Buffer),
    /// New content; cursor, scroll and selection are kept.
    Content(Document),
    /// Buffer update plus text for the clipboard (cut/copy).
    Clip(Buffer, Document),
}

impl From<Buffer> for Edit {
    fn from(buffer: Buffer) -> Self {
        Edit::Buffer(buffer)
    }
}

impl From<Document> for Edit {
    fn from(content: Document) -> Self {
        Edit::Content(content)
    }
}

impl From<(Buffer, Document)> for Edit {
    fn from((buffer, text): (Buffer, Document)) -> Self {
        Edit::Clip(buffer, text)
    }
}

/// Folds an edit into the application and scrolls the cursor into view.
/// Empty clipboard text is not recorded.
pub fn apply_edit(mut app: Application, size: Coord, edit: impl Into<Edit>) -> Application {
    let buffer = match edit.into() {
        Edit::Buffer(buffer) => buffer,
        Edit::Content(content) => Buffer {
            content,
            ..app.buffer
        },
        Edit::Clip(buffer, text) => {
            if !text.is_empty() {
                app = put_clipboard(app, text);
            }
            buffer
        }
    };
    app.buffer = scroll_to_cursor(buffer, size);
    app
}

pub fn put_message(mut app: Application, text: impl Into<Arc<str>>) -> Application {
    let content = text.into();
    tracing::debug!(message = %content, "message");
    app.messages.push(Message {
        time_stamp: unix_now(),
        content,
    });
    app
}

pub fn put_clipboard(mut app: Application, text: Document) -> Application {
    app.clipboard.push(text);
    app
}

/// Inserts the most recent clipboard entry at the cursor. No-op when the
/// clipboard is empty.
pub fn paste(app: Application, size: Coord) -> Application {
    let Some(text) = app.clipboard.last() else {
        return app;
    };
    let buffer = insert_text(app.buffer.clone(), text);
    apply_edit(app, size, buffer)
}

pub fn clear_input(mut app: Application) -> Application {
    app.input.clear();
    app
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
