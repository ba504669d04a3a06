use crate::error::AppError;
use crate::models::{LogEntry, Mood};
use chrono::Utc;
use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Owner of the append-only mood log file.
///
/// Entries are plain text lines; the file is created lazily on the first
/// append and survives resets as an empty file. Access is not synchronized
/// here; callers serialize concurrent use.
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log file currently exists on disk.
    ///
    /// A missing file is an ordinary `false`; only a real storage fault
    /// (permissions, unreadable parent) is an error.
    pub fn exists(&self) -> Result<bool, AppError> {
        Ok(self.path.try_exists()?)
    }

    /// Append one mood, stamped with the current UTC time. Returns the log
    /// path on success.
    ///
    /// The file is rewritten whole: current content (empty when the file does
    /// not exist yet) plus the new line. On failure nothing is retried and
    /// the previous content is left as it was.
    pub fn append(&self, mood: Mood) -> Result<PathBuf, AppError> {
        let entry = LogEntry::new(mood, Utc::now());

        let mut content = match fs::read_to_string(&self.path) {
            Ok(existing) => existing,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(AppError::Io(e)),
        };
        content.push_str(&entry.to_line());
        content.push('\n');
        fs::write(&self.path, content)?;

        Ok(self.path.clone())
    }

    /// Clear the log by overwriting it with empty content.
    ///
    /// The file is left in place (zero bytes), created if absent. Idempotent.
    pub fn reset(&self) -> Result<(), AppError> {
        fs::write(&self.path, "")?;
        Ok(())
    }

    /// Read back all entries, oldest first.
    ///
    /// A missing file reads as no entries. Lines that do not parse are
    /// skipped with a warning; the file is plain text and user-editable.
    pub fn entries(&self) -> Result<Vec<LogEntry>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::Io(e)),
        };

        let mut entries = Vec::new();
        for line in content.lines() {
            if line.is_empty() {
                continue;
            }
            match LogEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => warn!("Skipping malformed log line: {:?}", line),
            }
        }
        Ok(entries)
    }
}
