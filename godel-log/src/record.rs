//! Log record definitions

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Most detailed tracing information
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// General information
    Info = 2,
    /// Warnings
    Warn = 3,
    /// Errors
    Error = 4,
}

impl Level {
    /// Convert the level to its display string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Parse a level from its u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single log record
#[derive(Clone, Debug)]
pub struct Record {
    /// Unix timestamp in milliseconds
    pub timestamp_ms: u64,
    /// Log level
    pub level: Level,
    /// Module path (determined at compile time)
    pub target: &'static str,
    /// Formatted message
    pub message: String,
}

impl Record {
    /// Create a new record
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp_ms: current_timestamp_ms(),
            level,
            target,
            message: message.into(),
        }
    }

    /// Format the record as a single line
    pub fn format(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            format_timestamp(self.timestamp_ms),
            self.level,
            self.target,
            self.message
        )
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Render a millisecond timestamp as `HH:MM:SS.mmm` (UTC, day-relative)
fn format_timestamp(ms: u64) -> String {
    let total_secs = ms / 1000;
    let millis = ms % 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = (total_secs / 3600) % 24;
    format!("{hours:02}:{mins:02}:{secs:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_as_str() {
        assert_eq!(Level::Trace.as_str(), "TRACE");
        assert_eq!(Level::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_level_from_u8_roundtrip() {
        for raw in 0..=4u8 {
            let level = Level::from_u8(raw).unwrap();
            assert_eq!(level as u8, raw);
        }
        assert_eq!(Level::from_u8(5), None);
    }

    #[test]
    fn test_record_format() {
        let record = Record::new(Level::Info, "godel::test", "hello");
        let line = record.format();
        assert!(line.contains("INFO"));
        assert!(line.contains("godel::test"));
        assert!(line.contains("hello"));
    }

    #[test]
    fn test_format_timestamp() {
        // 01:02:03.456 into the day
        let ms = ((1 * 3600 + 2 * 60 + 3) * 1000 + 456) as u64;
        assert_eq!(format_timestamp(ms), "01:02:03.456");
    }
}
