//! Raw mode / alternate screen lifetime.
//!
//! `TerminalGuard` restores the terminal when dropped; a `TerminalRestorer`
//! handle lets a signal thread do the same. Restoring happens at most once.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode plus the alternate screen on stdout.
#[derive(Debug, Default)]
pub struct CrosstermOps;

impl TerminalOps for CrosstermOps {
    fn setup(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
    }

    fn restore(&self) -> io::Result<()> {
        // Run every step; report the first failure.
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        raw.and(screen)
    }
}

struct Shared {
    ops: Arc<dyn TerminalOps>,
    done: AtomicBool,
}

#[derive(Clone)]
pub struct TerminalRestorer(Arc<Shared>);

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        match self.0.done.swap(true, Ordering::SeqCst) {
            true => Ok(()),
            false => self.0.ops.restore(),
        }
    }

    pub fn is_restored(&self) -> bool {
        self.0.done.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard(TerminalRestorer);

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermOps))
    }

    /// Runs `ops.setup()`; nothing is restored if setup fails.
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let shared = Shared {
            ops,
            done: AtomicBool::new(false),
        };
        Ok(Self(TerminalRestorer(Arc::new(shared))))
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.0.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.0.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        128 + match self {
            TerminationSignal::SigInt => 2,
            TerminationSignal::SigTerm => 15,
        }
    }
}

/// Forwards the first SIGINT/SIGTERM to `tx`. If the event loop has not shut
/// down within the grace period the thread restores the terminal and exits.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use std::time::Duration;

    const GRACE: Duration = Duration::from_secs(2);

    let mut signals = signal_hook::iterator::Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let received = signals.forever().find_map(|sig| match sig {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        });
        let Some(signal) = received else {
            return;
        };
        tracing::info!(?signal, "termination signal");
        if tx.send(signal).is_err() {
            // Event loop already gone.
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
        std::thread::sleep(GRACE);
        let _ = restorer.restore();
        std::process::exit(signal.exit_code());
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
