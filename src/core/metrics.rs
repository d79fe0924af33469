//! Dispatch metrics for observability
//!
//! Counters describing what happened to each message handed to the
//! dispatcher: delivered to a handler, filtered by the threshold, or
//! discarded because output was disabled.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for dispatcher activity
///
/// # Example
///
/// ```
/// use rust_console_logger::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
///
/// metrics.record_delivered();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.delivered(), 1);
/// assert_eq!(metrics.total_seen(), 2);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Messages handed to the active output handler
    delivered: AtomicU64,

    /// Messages below the minimum level
    filtered: AtomicU64,

    /// Messages dropped because no output handler was installed
    discarded: AtomicU64,

    /// Delivered messages that were cut to the buffer capacity
    truncated: AtomicU64,
}

impl DispatchMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            truncated: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn truncated(&self) -> u64 {
        self.truncated.load(Ordering::Relaxed)
    }

    /// Every message that reached the dispatcher, whatever its fate
    pub fn total_seen(&self) -> u64 {
        self.delivered() + self.filtered() + self.discarded()
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_discarded(&self) -> u64 {
        self.discarded.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncated(&self) -> u64 {
        self.truncated.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.truncated.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered()),
            filtered: AtomicU64::new(self.filtered()),
            discarded: AtomicU64::new(self.discarded()),
            truncated: AtomicU64::new(self.truncated()),
        }
    }
}
