//! User-facing notices.
//!
//! Service outcomes surface to the diner as toasts. Here that is a
//! fire-and-forget sink the services push messages into; the view layer
//! supplies its own implementation.
//! [`TracingSink`] logs, [`MemorySink`] collects (handy in tests and the demo).

use std::sync::{Mutex, PoisonError};

/// A message for the diner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Something worked.
    Success(String),
    /// Something didn't; the message is safe to show as-is.
    Error(String),
}

impl Notice {
    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    /// Whether this notice reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A fire-and-forget sink for notices.
///
/// Pushing never blocks and never fails from the caller's point of view.
pub trait NoticeSink: Send + Sync {
    /// Deliver a notice to the diner.
    fn push(&self, notice: Notice);
}

/// Logs notices through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn push(&self, notice: Notice) {
        match &notice {
            Notice::Success(msg) => tracing::info!(notice = %msg, "notice"),
            Notice::Error(msg) => tracing::warn!(notice = %msg, "notice"),
        }
    }
}

/// Collects notices in memory, in push order.
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: Mutex<Vec<Notice>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything pushed so far.
    #[must_use]
    pub fn all(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent notice, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NoticeSink for MemorySink {
    fn push(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
