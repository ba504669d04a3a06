use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use crate::store::LogStore;
use std::fs;
use std::path::{Path, PathBuf};
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, FilePath};

/// How a share attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The log was handed off; holds the destination it was written to.
    Shared(PathBuf),
    /// The user backed out of the share flow. Not an error.
    Cancelled,
}

/// Host share/export capability.
pub trait ShareTarget {
    fn is_available(&self) -> bool;
    fn share(&self, path: &Path) -> Result<ShareOutcome, AppError>;
}

/// Export the log file through `target`.
///
/// A log that has never been written (or was deleted out from under us) and
/// an unavailable target are both reported before the share flow is opened;
/// the capability is only invoked once the gates pass.
pub fn export(store: &LogStore, target: &dyn ShareTarget) -> Result<ShareOutcome, AppError> {
    if !store.exists()? {
        return Err(AppError::NothingToExport);
    }
    if !target.is_available() {
        return Err(AppError::ShareUnavailable);
    }
    target.share(store.path())
}

/// Share by asking the user where to save a copy of the log.
pub struct DialogShare {
    app: AppHandle,
}

impl DialogShare {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ShareTarget for DialogShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, path: &Path) -> Result<ShareOutcome, AppError> {
        let picked = self
            .app
            .dialog()
            .file()
            .set_file_name(LOG_FILE_NAME)
            .add_filter("Log files", &["txt"])
            .blocking_save_file();

        match picked {
            Some(FilePath::Path(dest)) => {
                fs::copy(path, &dest)?;
                Ok(ShareOutcome::Shared(dest))
            }
            // A URI destination cannot take a plain file copy
            Some(FilePath::Url(_)) => Err(AppError::ShareUnavailable),
            None => Ok(ShareOutcome::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use std::cell::{Cell, RefCell};
    use tempfile::{tempdir, TempDir};

    struct FakeTarget {
        available: bool,
        outcome: ShareOutcome,
        calls: Cell<usize>,
        seen_path: RefCell<Option<PathBuf>>,
    }

    impl FakeTarget {
        fn new(available: bool, outcome: ShareOutcome) -> Self {
            Self {
                available,
                outcome,
                calls: Cell::new(0),
                seen_path: RefCell::new(None),
            }
        }
    }

    impl ShareTarget for FakeTarget {
        fn is_available(&self) -> bool {
            self.available
        }

        fn share(&self, path: &Path) -> Result<ShareOutcome, AppError> {
            self.calls.set(self.calls.get() + 1);
            *self.seen_path.borrow_mut() = Some(path.to_path_buf());
            Ok(self.outcome.clone())
        }
    }

    fn setup() -> (LogStore, TempDir) {
        let dir = tempdir().unwrap();
        let store = LogStore::new(dir.path().join("logs.txt"));
        (store, dir)
    }

    #[test]
    fn test_export_without_log_never_touches_target() {
        let (store, _dir) = setup();
        let target = FakeTarget::new(true, ShareOutcome::Cancelled);

        let result = export(&store, &target);

        assert!(matches!(result, Err(AppError::NothingToExport)));
        assert_eq!(target.calls.get(), 0);
    }

    #[test]
    fn test_export_with_unavailable_target_never_opens_share_flow() {
        let (store, _dir) = setup();
        store.append(Mood::Happy).unwrap();
        let target = FakeTarget::new(false, ShareOutcome::Cancelled);

        let result = export(&store, &target);

        assert!(matches!(result, Err(AppError::ShareUnavailable)));
        assert_eq!(target.calls.get(), 0);
    }

    #[test]
    fn test_export_hands_log_path_to_target() {
        let (store, _dir) = setup();
        store.append(Mood::Happy).unwrap();
        let dest = PathBuf::from("/tmp/exported.txt");
        let target = FakeTarget::new(true, ShareOutcome::Shared(dest.clone()));

        let result = export(&store, &target).unwrap();

        assert_eq!(result, ShareOutcome::Shared(dest));
        assert_eq!(target.calls.get(), 1);
        assert_eq!(target.seen_path.borrow().as_deref(), Some(store.path()));
    }

    #[test]
    fn test_cancelled_share_is_not_an_error() {
        let (store, _dir) = setup();
        store.append(Mood::Sad).unwrap();
        let target = FakeTarget::new(true, ShareOutcome::Cancelled);

        let result = export(&store, &target).unwrap();

        assert_eq!(result, ShareOutcome::Cancelled);
        assert_eq!(target.calls.get(), 1);
    }

    #[test]
    fn test_export_works_on_reset_empty_log() {
        let (store, _dir) = setup();
        store.append(Mood::Happy).unwrap();
        store.reset().unwrap();
        let target = FakeTarget::new(true, ShareOutcome::Cancelled);

        // The file still exists after a reset, so the gate passes
        let result = export(&store, &target).unwrap();

        assert_eq!(result, ShareOutcome::Cancelled);
        assert_eq!(target.calls.get(), 1);
    }
}
