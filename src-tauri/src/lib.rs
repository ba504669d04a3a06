mod commands;
pub mod constants;
pub mod error;
pub mod haptics;
pub mod models;
pub mod monitor;
pub mod session;
pub mod share;
pub mod store;

use crate::haptics::SystemHaptics;
use crate::monitor::{IdleMonitor, MonitorConfig};
use crate::session::SessionState;
use crate::store::LogStore;
use directories::ProjectDirs;
use log::{error, info, warn};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tauri::{webview::WebviewWindowBuilder, Manager, RunEvent};

/// Holds the idle monitor thread handle for graceful shutdown
pub struct MonitorHandle(Mutex<Option<JoinHandle<()>>>);

/// Error type for MoodTap initialization failures
#[derive(Debug)]
pub enum InitError {
    NoProjectDirs,
    DataDirCreation(std::io::Error),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::NoProjectDirs => write!(f, "Could not determine project directories"),
            InitError::DataDirCreation(e) => write!(f, "Could not create data directory: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

fn get_log_path() -> Result<std::path::PathBuf, InitError> {
    let proj_dirs = ProjectDirs::from("com", "moodtap", "MoodTap").ok_or(InitError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(InitError::DataDirCreation)?;
    Ok(data_dir.join(constants::LOG_FILE_NAME))
}

/// Lock a mutex, recovering from poisoning if necessary
pub(crate) fn safe_lock<'a, T>(mutex: &'a Mutex<T>, context: &str) -> std::sync::MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("{} mutex was poisoned, recovering", context);
            poisoned.into_inner()
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    let builder = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_notification::init());
    #[cfg(mobile)]
    let builder = builder.plugin(tauri_plugin_haptics::init());

    builder
        .setup(|app| {
            let log_path = match get_log_path() {
                Ok(path) => path,
                Err(e) => {
                    error!("MoodTap initialization failed: {}", e);
                    return Err(Box::new(e) as Box<dyn std::error::Error>);
                }
            };
            info!("Mood log lives at {}", log_path.display());

            let store = LogStore::new(log_path);

            // Start the idle monitor
            let feedback = Arc::new(SystemHaptics::new(app.handle().clone()));
            let monitor = IdleMonitor::new(feedback, MonitorConfig::default());
            let handle = monitor.start();
            let monitor = Arc::new(monitor);
            let monitor_handle = MonitorHandle(Mutex::new(Some(handle)));

            // Store in app state
            app.manage(Mutex::new(store));
            app.manage(Mutex::new(SessionState::new()));
            app.manage(monitor);
            app.manage(monitor_handle);

            let _main_window = WebviewWindowBuilder::new(app, "main", tauri::WebviewUrl::default())
                .title("MoodTap")
                .inner_size(420.0, 600.0)
                .resizable(true)
                .center()
                .build()?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::record_mood,
            commands::export_logs,
            commands::reset_logs,
            commands::get_log_state,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let RunEvent::ExitRequested { .. } = event {
                // Stop the idle monitor and wait for its thread on the way out
                if let Some(monitor) = app.try_state::<Arc<IdleMonitor>>() {
                    monitor.stop();
                }
                if let Some(handle_state) = app.try_state::<MonitorHandle>() {
                    let mut guard = safe_lock(&handle_state.0, "MonitorHandle");
                    if let Some(handle) = guard.take() {
                        let _ = handle.join();
                    }
                }
            }
        });
}
