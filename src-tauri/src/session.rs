use std::path::{Path, PathBuf};

/// Per-launch UI state.
///
/// The log path is only known once a mood has been recorded this session; it
/// starts unset on every launch even when a log file survives on disk, so
/// the export control starts disabled.
#[derive(Debug, Default)]
pub struct SessionState {
    log_path: Option<PathBuf>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    pub fn has_log(&self) -> bool {
        self.log_path.is_some()
    }

    pub fn set_log_path(&mut self, path: PathBuf) {
        self.log_path = Some(path);
    }

    pub fn clear_log_path(&mut self) {
        self.log_path = None;
    }
}
