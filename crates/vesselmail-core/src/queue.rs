//! Thread-safe FIFO queue (outbox / inbox).
//!
//! Every accessor takes the lock for exactly one critical section and never
//! across I/O, so `size`/`is_empty`/`enqueue`/`dequeue` are linearizable
//! across threads. Backed by a ring buffer.

use std::collections::VecDeque;
use std::fmt::Write;

use parking_lot::Mutex;

/// Summary returned for an empty queue.
pub const EMPTY_QUEUE_SUMMARY: &str = "No messages in queue.\n";

/// Items that can be listed in a queue summary.
pub trait Subject {
    fn subject(&self) -> &str;
}

#[derive(Debug)]
pub struct Queue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Append to the tail.
    pub fn enqueue(&self, item: T) {
        let size = {
            let mut items = self.items.lock();
            items.push_back(item);
            items.len()
        };
        tracing::debug!(size, "queue: enqueued");
    }

    /// Remove the head, or `None` when empty.
    pub fn dequeue(&self) -> Option<T> {
        let (item, size) = {
            let mut items = self.items.lock();
            let item = items.pop_front();
            (item, items.len())
        };
        match &item {
            Some(_) => tracing::debug!(size, "queue: dequeued"),
            None => tracing::debug!("queue: dequeue on empty queue"),
        }
        item
    }

    pub fn size(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T: Subject> Queue<T> {
    /// Subjects in queue order.
    pub fn subjects(&self) -> Vec<String> {
        self.items
            .lock()
            .iter()
            .map(|m| m.subject().to_string())
            .collect()
    }

    /// Human-readable count plus ordered subjects.
    pub fn summary(&self) -> String {
        let subjects = self.subjects();
        if subjects.is_empty() {
            return EMPTY_QUEUE_SUMMARY.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Number of messages in queue: {}", subjects.len());
        let _ = writeln!(out, "Subjects: {}", subjects.join(" || "));
        out
    }
}
