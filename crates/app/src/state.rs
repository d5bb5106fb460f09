//! Page state shared across screens
//!
//! Plain values owned by each page: the notification list and the
//! "copied" indicator. Nothing here is global.

use std::time::{Duration, Instant};

// ============================================================================
// Notifications
// ============================================================================

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// Short label for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// One user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Ordered list of messages raised by page actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    messages: Vec<StatusMessage>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn push(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.messages.push(StatusMessage {
            text: text.into(),
            level,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text, StatusLevel::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, StatusLevel::Error);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, StatusLevel::Info);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(text, StatusLevel::Warning);
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    /// Most recent message
    pub fn last(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }

    /// Take every message, leaving the list empty
    pub fn drain(&mut self) -> Vec<StatusMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Check if any error was raised
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == StatusLevel::Error)
    }
}

// ============================================================================
// Copy Feedback
// ============================================================================

/// How long a "copied" indicator stays visible
pub const COPY_RESET: Duration = Duration::from_secs(2);

/// Keyed "copied" indicator
///
/// Only the most recently copied key is shown, and it expires after
/// [`COPY_RESET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    last: Option<(String, Instant)>,
    reset_after: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self {
            last: None,
            reset_after: COPY_RESET,
        }
    }
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the reset delay
    pub fn with_reset_after(mut self, reset_after: Duration) -> Self {
        self.reset_after = reset_after;
        self
    }

    /// Record a copy of `key` now
    pub fn copied(&mut self, key: impl Into<String>) {
        self.copied_at(key, Instant::now());
    }

    /// Record a copy of `key` at `at`, replacing any previous key
    pub fn copied_at(&mut self, key: impl Into<String>, at: Instant) {
        self.last = Some((key.into(), at));
    }

    /// Check if `key` should currently show as copied
    pub fn is_copied(&self, key: &str) -> bool {
        self.is_copied_at(key, Instant::now())
    }

    pub fn is_copied_at(&self, key: &str, now: Instant) -> bool {
        self.active_key_at(now) == Some(key)
    }

    /// The key still showing as copied at `now`
    pub fn active_key_at(&self, now: Instant) -> Option<&str> {
        match &self.last {
            Some((key, at)) if now.saturating_duration_since(*at) < self.reset_after => {
                Some(key.as_str())
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
