use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No mood log to share yet")]
    NothingToExport,

    #[error("Sharing is not available on this device")]
    ShareUnavailable,

    #[error("Lock poisoned")]
    LockPoisoned,
}

impl AppError {
    /// User errors are expected outcomes the UI explains to the user;
    /// everything else is a fault worth an error-level log.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::NothingToExport | AppError::ShareUnavailable)
    }
}

// For Tauri command returns - converts AppError to String
impl From<AppError> for String {
    fn from(e: AppError) -> Self {
        e.to_string()
    }
}
