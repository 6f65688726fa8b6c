//! Incremental key dispatch.
//!
//! Keys accumulate in `Application::input` while they form a proper prefix of
//! a binding. An exact match runs the bound command, anything else either
//! self-inserts (a single printable key) or is dropped.

use std::sync::Arc;

use crate::core::{describe_keys, Key};
use crate::models::Coord;

use super::command::Outcome;
use super::editor::insert_char;
use super::services::KeyMatch;
use super::state::{apply_edit, clear_input, put_message, Application};

pub fn handle_key(mut app: Application, key: Key, size: Coord) -> Outcome {
    app.input.push(key);
    let keys = Arc::clone(&app.keys);
    match keys.lookup(&app.input) {
        KeyMatch::Exact(name) => {
            tracing::debug!(keys = %describe_keys(&app.input), command = name, "key bound");
            eval_command(clear_input(app), name, size)
        }
        KeyMatch::Prefix => {
            tracing::trace!(keys = %describe_keys(&app.input), "key sequence pending");
            Outcome::Continue(app)
        }
        KeyMatch::None => {
            let printable = match app.input.as_slice() {
                [only] => only.printable(),
                _ => None,
            };
            if let Some(ch) = printable {
                return Outcome::Continue(eval_insert_char(clear_input(app), ch, size));
            }
            let keys = describe_keys(&app.input);
            tracing::warn!(keys = %keys, "unbound key sequence");
            Outcome::Continue(put_message(
                clear_input(app),
                format!("{keys} is undefined"),
            ))
        }
    }
}

/// Runs the command registered under `name`. `Outcome::Terminate` is the
/// only way a command asks the editor to stop.
pub fn eval_command(app: Application, name: &str, size: Coord) -> Outcome {
    let commands = Arc::clone(&app.commands);
    match commands.get(name) {
        Some(command) => command(app, size),
        None => {
            tracing::warn!(command = name, "unknown command");
            Outcome::Continue(put_message(app, format!("unknown command: {name}")))
        }
    }
}

pub fn eval_insert_char(app: Application, ch: char, size: Coord) -> Application {
    let buffer = insert_char(app.buffer.clone(), ch);
    apply_edit(app, size, buffer)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dispatch.rs"]
mod tests;
