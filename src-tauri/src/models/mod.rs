pub mod log_entry;
pub mod mood;

pub use log_entry::LogEntry;
pub use mood::Mood;
