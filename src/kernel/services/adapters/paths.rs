//! Per-user directories.
//!
//! - macOS: ~/Library/Application Support/pedit, ~/Library/Logs/pedit
//! - Linux: $XDG_CONFIG_HOME/pedit (~/.config/pedit), $XDG_STATE_HOME/pedit/logs
//!   (~/.local/state/pedit/logs)
//! - Windows: %APPDATA%\pedit, %LOCALAPPDATA%\pedit\logs

use std::path::PathBuf;

const APP_NAME: &str = "pedit";
const LOG_DIR: &str = "logs";

#[cfg(not(target_os = "windows"))]
fn home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home().map(|home| home.join("Library/Application Support").join(APP_NAME))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|dir| PathBuf::from(dir).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home().map(|home| home.join(".config")))
            .map(|dir| dir.join(APP_NAME))
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home().map(|home| home.join("Library/Logs").join(APP_NAME))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("LOCALAPPDATA").map(|dir| PathBuf::from(dir).join(APP_NAME).join(LOG_DIR))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        std::env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| home().map(|home| home.join(".local/state")))
            .map(|dir| dir.join(APP_NAME).join(LOG_DIR))
    }
}

/// Creates the log directory if needed, falling back to the temp dir.
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir()
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME).join(LOG_DIR));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
