//! Logger implementation

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// Log output target trait
pub trait LogSink: Send + Sync {
    /// Write one log record
    fn write(&self, record: &Record);
}

/// Logger configuration and state
pub struct Logger {
    /// Current log level (atomic so it can be raised/lowered at runtime)
    level: AtomicU8,
    /// Output targets
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// Create a new logger
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// Attach an output target (builder style)
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// Attach an output target
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        if let Ok(mut sinks) = self.sinks.lock() {
            sinks.push(Box::new(sink));
        }
    }

    /// Change the log level at runtime
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Get the current log level
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// Check whether a level is enabled
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Record a message (the macros are the public entry point)
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        if let Ok(sinks) = self.sinks.lock() {
            for sink in sinks.iter() {
                sink.write(&record);
            }
        }
    }

    /// Create a disabled logger (Error level, no sinks) for tests or
    /// callers that opt out of logging
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }
}

// Allow chaining loggers: an Arc<Logger> can itself act as a sink.
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// Stdout sink
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

/// Stderr sink
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

/// File sink (append mode)
pub struct FileSink {
    file: Mutex<std::fs::File>,
}

impl FileSink {
    /// Create a file sink, appending to the file at `path`
    pub fn new(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    #[inline(never)]
    fn write(&self, record: &Record) {
        use std::io::Write;
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", record.format());
        }
    }
}
