//! Logging configuration
//!
//! Convenience one-call initialization of the logging system.

use crate::logger::{FileSink, StderrSink, StdoutSink};
use crate::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// Log output target configuration
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to a file (path)
    File(String),
    /// Write to a ring buffer (capacity)
    RingBuffer(usize),
}

/// Log configuration
///
/// # Example
///
/// ```
/// use godel_log::{LogConfig, Level};
///
/// let config = LogConfig::new(Level::Debug).with_ring_buffer(10000);
/// let (logger, ring) = config.init();
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Log level
    pub level: Level,
    /// Output targets
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// Create a configuration with the given level and no outputs
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// Recommended development configuration
    ///
    /// - Debug level
    /// - stdout output
    /// - 10000-record ring buffer for crash dumps
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
        }
    }

    /// Recommended production configuration
    ///
    /// - Warn level
    /// - stderr output
    /// - 1000-record ring buffer
    pub fn production() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: vec![OutputConfig::Stderr, OutputConfig::RingBuffer(1000)],
        }
    }

    /// Silent test configuration (Error level, no outputs)
    pub fn test() -> Self {
        LogConfig {
            level: Level::Error,
            outputs: Vec::new(),
        }
    }

    /// Add a stdout output
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    /// Add a stderr output
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    /// Add a file output
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    /// Add a ring buffer output
    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// Initialize the logging system
    ///
    /// Returns `(logger, Option<ring_buffer>)`; the ring buffer is returned
    /// when configured so callers can dump it on failure.
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer: Option<Arc<LogRingBuffer>> = None;

        for output in self.outputs {
            match output {
                OutputConfig::Stdout => logger.add_sink(StdoutSink),
                OutputConfig::Stderr => logger.add_sink(StderrSink),
                OutputConfig::File(path) => {
                    if let Ok(sink) = FileSink::new(&path) {
                        logger.add_sink(sink);
                    }
                }
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}
