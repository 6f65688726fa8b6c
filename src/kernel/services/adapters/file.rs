//! Loading and saving buffers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::kernel::editor::Buffer;
use crate::models::{Document, LineEnding};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotAFile(PathBuf),
    InvalidUtf8(PathBuf),
    NoFileName,
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
            FileError::InvalidUtf8(p) => write!(f, "Not valid UTF-8: {}", p.display()),
            FileError::NoFileName => write!(f, "Buffer has no file name"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

/// Reads `path` into a fresh buffer. A file that does not exist yet opens as
/// an empty buffer under that name.
pub fn load_file(path: &Path) -> Result<Buffer> {
    let name = path.to_string_lossy();
    if path.is_dir() {
        return Err(FileError::NotAFile(path.to_path_buf()));
    }
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "new file");
            return Ok(Buffer::new(name, Document::new()));
        }
        Err(e) => return Err(e.into()),
    };
    let text = String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(path.to_path_buf()))?;
    let line_ending = LineEnding::detect(&text);
    let text = match line_ending {
        LineEnding::CrLf => text.replace("\r\n", "\n"),
        LineEnding::Lf => text,
    };
    let buffer = Buffer {
        line_ending,
        ..Buffer::from_text(name, &text)
    };
    tracing::info!(
        path = %path.display(),
        lines = buffer.content.len_lines(),
        ?line_ending,
        "file loaded"
    );
    Ok(buffer)
}

/// Writes the buffer content to its file with the line ending it was loaded
/// with and returns the buffer with `file_content` caught up.
pub fn save_file(buf: &Buffer) -> Result<Buffer> {
    if buf.file_name.is_empty() {
        return Err(FileError::NoFileName);
    }
    let path = Path::new(&*buf.file_name);
    let mut writer = BufWriter::new(File::create(path)?);
    buf.content.write_to(&mut writer, buf.line_ending)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "file saved");
    Ok(Buffer {
        file_content: buf.content.clone(),
        ..buf.clone()
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/file.rs"]
mod tests;
