use super::*;
use tempfile::tempdir;

const SIZE: Coord = Coord::new(10, 40);

fn app(text: &str, cursor: Coord) -> Application {
    Application::with_defaults(Buffer {
        cursor,
        ..Buffer::from_text("test.txt", text)
    })
}

fn run(registry: &CommandRegistry, name: &str, app: Application) -> Application {
    let command = registry.get(name).unwrap();
    command(app, SIZE).into_app().unwrap()
}

#[test]
fn defaults_cover_the_editor_commands() {
    let registry = CommandRegistry::with_defaults();
    for name in [
        "move-up",
        "move-down",
        "move-left",
        "move-right",
        "move-beginning-of-line",
        "move-end-of-line",
        "beginning-of-buffer",
        "end-of-buffer",
        "page-up",
        "page-down",
        "new-line",
        "insert-tab",
        "delete-char",
        "delete-char-right",
        "kill-line",
        "copy",
        "cut",
        "paste",
        "start-selection",
        "clear-selection",
        "select-whole-buffer",
        "save",
        "quit",
    ] {
        assert!(registry.contains(name), "missing {name}");
    }
    assert!(registry.get("no-such-command").is_none());
}

#[test]
fn names_are_sorted() {
    let registry = CommandRegistry::with_defaults();
    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn register_replaces_existing_command() {
    let mut registry = CommandRegistry::new();
    registry.register("go", edit_command(crate::kernel::editor::move_buffer_end));
    registry.register("go", quit_command());
    assert_eq!(registry.names(), vec!["go"]);
    let command = registry.get("go").unwrap();
    assert!(command(app("", Coord::ORIGIN), SIZE).is_terminate());
}

#[test]
fn edit_commands_scroll_to_cursor() {
    let registry = CommandRegistry::with_defaults();
    let text = vec!["x"; 40].join("\n");
    let app = run(&registry, "end-of-buffer", app(&text, Coord::ORIGIN));
    assert_eq!(app.buffer.cursor, Coord::new(39, 1));
    assert_eq!(app.buffer.scroll.row, 30);
}

#[test]
fn scroll_commands_page_through_document() {
    let registry = CommandRegistry::with_defaults();
    let text = vec!["x"; 40].join("\n");
    let app = run(&registry, "page-down", app(&text, Coord::ORIGIN));
    assert_eq!(app.buffer.scroll.row, 10);
    assert_eq!(app.buffer.cursor.row, 10);
    let app = run(&registry, "page-up", app);
    assert_eq!(app.buffer.scroll.row, 0);
    assert_eq!(app.buffer.cursor.row, 9);
}

#[test]
fn clip_commands_fill_clipboard() {
    let registry = CommandRegistry::with_defaults();
    let app = run(&registry, "kill-line", app("hello\nworld", Coord::ORIGIN));
    assert_eq!(app.buffer.content.to_string(), "\nworld");
    assert_eq!(app.clipboard.last().map(|doc| doc.to_string()).as_deref(), Some("hello"));

    let app = run(&registry, "move-down", app);
    let app = run(&registry, "paste", app);
    assert_eq!(app.buffer.content.to_string(), "\nhelloworld");
}

#[test]
fn copy_command_keeps_content() {
    let registry = CommandRegistry::with_defaults();
    let app = run(&registry, "select-whole-buffer", app("abc", Coord::ORIGIN));
    let app = run(&registry, "copy", app);
    assert_eq!(app.buffer.content.to_string(), "abc");
    assert!(app.buffer.selection_start.is_none());
    assert_eq!(app.clipboard.len(), 1);
}

#[test]
fn quit_terminates() {
    let registry = CommandRegistry::with_defaults();
    let command = registry.get("quit").unwrap();
    let outcome = command(app("", Coord::ORIGIN), SIZE);
    assert!(outcome.is_terminate());
    assert!(outcome.into_app().is_none());
}

#[test]
fn save_writes_file_and_reports() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let name = path.to_string_lossy().into_owned();

    let mut app = Application::with_defaults(Buffer::from_text(name.as_str(), "old"));
    app.buffer.content = Document::from_text("new text\n");
    assert!(app.buffer.is_modified());

    let registry = CommandRegistry::with_defaults();
    let app = run(&registry, "save", app);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new text\n");
    assert!(!app.buffer.is_modified());
    assert_eq!(
        app.last_message().map(|m| m.content.to_string()),
        Some(format!("saved {name}"))
    );
}

#[test]
fn save_failure_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.txt");
    let name = path.to_string_lossy().into_owned();
    let app = Application::with_defaults(Buffer::from_text(name.as_str(), "text"));

    let registry = CommandRegistry::with_defaults();
    let app = run(&registry, "save", app);

    let message = app.last_message().map(|m| m.content.to_string()).unwrap();
    assert!(message.starts_with(&format!("error saving {name}: ")), "{message}");
}
