// src-tauri/src/constants.rs

use std::time::Duration;

/// Name of the mood log file inside the app data directory
pub const LOG_FILE_NAME: &str = "logs.txt";

/// How long without a logged mood before the idle nudge fires
pub const IDLE_THRESHOLD: Duration = Duration::from_millis(60_000);

/// How often the idle monitor checks the clock
pub const POLL_INTERVAL: Duration = Duration::from_millis(1_000);
