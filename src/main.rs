use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use pedit::kernel::editor::{editor_size, scroll_to_cursor};
use pedit::kernel::services::adapters::{apply_keybindings, load_settings};
use pedit::kernel::services::{load_file, KeyMap};
use pedit::kernel::{handle_key, Application, CommandRegistry, Outcome};
use pedit::models::Coord;
use pedit::tui::crossterm::into_key;
use pedit::tui::render::render;
use pedit::tui::terminal_guard::{TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: pedit <file>");
        std::process::exit(2);
    };

    let logging = logging::init();

    let buffer = load_file(&path).map_err(io::Error::other)?;

    let mut keys = KeyMap::with_defaults();
    if let Some(settings) = load_settings() {
        let applied = apply_keybindings(&mut keys, &settings);
        tracing::info!(applied, "keybindings loaded from settings");
    }
    let app = Application::new(
        buffer,
        Arc::new(keys),
        Arc::new(CommandRegistry::with_defaults()),
    );

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread =
        pedit::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, app, &signal_rx);

    drop(terminal);
    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "editor loop failed");
        if let Some(logging) = &logging {
            eprintln!("pedit: {err} (logs in {})", logging.log_dir().display());
        }
    }
    drop(logging);
    result
}

fn window_size() -> io::Result<Coord> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok(editor_size(Coord::new(rows as usize, cols as usize)))
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: Application,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut size = window_size()?;
    app.buffer = scroll_to_cursor(app.buffer, size);

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "shutting down");
            return Ok(());
        }
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(event) => {
                let Some(key) = into_key(event) else {
                    continue;
                };
                match handle_key(app, key, size) {
                    Outcome::Continue(next) => app = next,
                    Outcome::Terminate => return Ok(()),
                }
            }
            Event::Resize(cols, rows) => {
                size = editor_size(Coord::new(rows as usize, cols as usize));
                app.buffer = scroll_to_cursor(app.buffer, size);
            }
            _ => {}
        }
    }
}
