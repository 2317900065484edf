//! Bounded log of notifications shown beside the board.
use std::collections::VecDeque;

/// Severity of a message entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Ring buffer of messages; the oldest entry is evicted when full.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::new(text, MessageLevel::Info));
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::new(text, MessageLevel::Warning));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::new(text, MessageLevel::Error));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
