use crate::error::AppError;
use crate::models::Mood;
use crate::monitor::IdleMonitor;
use crate::session::SessionState;
use crate::share::{self, DialogShare, ShareOutcome};
use crate::store::LogStore;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tauri::{AppHandle, State};

#[derive(Serialize)]
pub struct RecordMoodResponse {
    pub log_path: String,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub shared: bool,
    pub destination: Option<String>,
}

impl From<ShareOutcome> for ExportResponse {
    fn from(outcome: ShareOutcome) -> Self {
        match outcome {
            ShareOutcome::Shared(dest) => Self {
                shared: true,
                destination: Some(dest.display().to_string()),
            },
            ShareOutcome::Cancelled => Self {
                shared: false,
                destination: None,
            },
        }
    }
}

#[derive(Serialize)]
pub struct LogStateResponse {
    pub log_path: Option<String>,
    pub exists: bool,
    pub entry_count: usize,
}

/// Stringify an error for a command return, logging it at the right level.
fn command_error(context: &str, e: AppError) -> String {
    if e.is_user_error() {
        log::warn!("{}: {}", context, e);
    } else {
        log::error!("{}: {}", context, e);
    }
    e.into()
}

#[tauri::command]
pub async fn record_mood(
    store: State<'_, Mutex<LogStore>>,
    session: State<'_, Mutex<SessionState>>,
    monitor: State<'_, Arc<IdleMonitor>>,
    mood: Mood,
) -> Result<RecordMoodResponse, String> {
    let path = {
        let store = store.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
        store
            .append(mood)
            .map_err(|e| command_error("Failed to record mood", e))?
    };

    {
        let mut session = session.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
        session.set_log_path(path.clone());
    }

    // Only a successful append counts as activity for the idle clock
    monitor.record_activity();

    Ok(RecordMoodResponse {
        log_path: path.display().to_string(),
    })
}

#[tauri::command]
pub async fn export_logs(
    app: AppHandle,
    store: State<'_, Mutex<LogStore>>,
    session: State<'_, Mutex<SessionState>>,
) -> Result<ExportResponse, String> {
    {
        let session = session.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
        if !session.has_log() {
            return Err(command_error("Nothing to export", AppError::NothingToExport));
        }
    }

    let target = DialogShare::new(app);
    let store = store.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
    let outcome =
        share::export(&store, &target).map_err(|e| command_error("Failed to export log", e))?;

    Ok(ExportResponse::from(outcome))
}

#[tauri::command]
pub async fn reset_logs(
    store: State<'_, Mutex<LogStore>>,
    session: State<'_, Mutex<SessionState>>,
) -> Result<(), String> {
    {
        let store = store.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
        store
            .reset()
            .map_err(|e| command_error("Failed to reset log", e))?;
    }

    let mut session = session.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
    session.clear_log_path();

    Ok(())
}

#[tauri::command]
pub async fn get_log_state(
    store: State<'_, Mutex<LogStore>>,
    session: State<'_, Mutex<SessionState>>,
) -> Result<LogStateResponse, String> {
    let log_path = {
        let session = session.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
        session.log_path().map(|p| p.display().to_string())
    };

    let store = store.lock().map_err(|_| AppError::LockPoisoned.to_string())?;
    let exists = store
        .exists()
        .map_err(|e| command_error("Failed to check log file", e))?;
    let entry_count = store
        .entries()
        .map_err(|e| command_error("Failed to read log file", e))?
        .len();

    Ok(LogStateResponse {
        log_path,
        exists,
        entry_count,
    })
}
