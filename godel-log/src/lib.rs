//! godel-log - structured logging
//!
//! Logging system for the Godel editor core, designed around two rules:
//! - **Explicit passing**: no global logger; every component receives its
//!   `Arc<Logger>` through its constructor.
//! - **Non-blocking**: sinks never stall the caller; the ring buffer
//!   overwrites its oldest records when full.
//!
//! # Quick start
//!
//! ```
//! use godel_log::{LogConfig, debug};
//!
//! let (logger, ring) = LogConfig::test().init();
//! debug!(logger, "session started");
//! ```
//!
//! The ring buffer returned by [`LogConfig::init`] keeps the last N records
//! for crash dumps and for log assertions in tests.

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{FileSink, LogSink, Logger, StderrSink, StdoutSink};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

// The macros trace!, debug!, info!, warn!, error! and log! are exported at
// the crate root via #[macro_export].
