use crate::models::Mood;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// One recorded mood with its capture time. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub mood: Mood,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(mood: Mood, timestamp: DateTime<Utc>) -> Self {
        Self { mood, timestamp }
    }

    /// Format as a log file line, without the trailing newline.
    ///
    /// Timestamps are RFC 3339 UTC with millisecond precision, e.g.
    /// `Happy: 2024-01-01T00:00:00.000Z`.
    pub fn to_line(&self) -> String {
        format!(
            "{}: {}",
            self.mood.as_str(),
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }

    /// Parse a line produced by `to_line`. Returns `None` for anything else.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (label, timestamp) = line.split_once(": ")?;
        let mood = Mood::from_str(label)?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp.trim()).ok()?;
        Some(Self {
            mood,
            timestamp: timestamp.with_timezone(&Utc),
        })
    }
}
