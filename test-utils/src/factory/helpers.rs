//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Next value of a process-wide sequence, used to keep generated names and
/// document ids distinct across tests running in parallel.
///
/// Unrelated to the ids the database assigns.
pub fn next_seq() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}
