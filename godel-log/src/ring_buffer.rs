//! Log ring buffer
//!
//! Keeps the last N records; writers never block and never fail.

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Ring buffer statistics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    /// Current number of records
    pub record_count: usize,
    /// Records dropped because the buffer was full
    pub dropped_count: usize,
    /// Buffer capacity
    pub capacity: usize,
}

/// Log ring buffer
///
/// When full, new records overwrite the oldest ones (FIFO).
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    /// Create a new ring buffer
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    /// Push a record, overwriting the oldest when full
    fn push(&self, record: Record) {
        if let Ok(mut inner) = self.inner.lock() {
            if inner.len() >= self.capacity {
                inner.pop_front();
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
            inner.push_back(record);
        }
    }

    /// Get all current records in chronological order
    pub fn dump_records(&self) -> Vec<Record> {
        match self.inner.lock() {
            Ok(inner) => inner.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Dump all records as a newline-joined string
    pub fn dump(&self) -> String {
        self.dump_records()
            .iter()
            .map(|r| r.format())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clear the buffer
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.clear();
        }
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Get statistics
    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped.load(Ordering::Relaxed),
            capacity: self.capacity,
        }
    }

    /// Current number of records
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    fn record(message: &str) -> Record {
        Record::new(Level::Info, "test", message)
    }

    #[test]
    fn test_push_and_dump() {
        let ring = LogRingBuffer::new(10);
        ring.write(&record("one"));
        ring.write(&record("two"));

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].message, "two");
    }

    #[test]
    fn test_overwrite_when_full() {
        let ring = LogRingBuffer::new(2);
        ring.write(&record("one"));
        ring.write(&record("two"));
        ring.write(&record("three"));

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "two");
        assert_eq!(records[1].message, "three");
        assert_eq!(ring.stats().dropped_count, 1);
    }

    #[test]
    fn test_clear() {
        let ring = LogRingBuffer::new(10);
        ring.write(&record("one"));
        assert!(!ring.is_empty());

        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.stats().dropped_count, 0);
    }

    #[test]
    fn test_dump_string() {
        let ring = LogRingBuffer::new(10);
        ring.write(&record("first line"));
        ring.write(&record("second line"));

        let dump = ring.dump();
        assert!(dump.contains("first line"));
        assert!(dump.contains("second line"));
    }
}
