//! Mail message envelope
//!
//! Carries just enough of a message for routing decisions: who it is from,
//! where it is going, and whether it should be kept.

use super::identity::same_identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject markers of lifecycle notifications that are never persisted.
///
/// Matched case-insensitively as a subject prefix. Handoff notes are not
/// markers and always persist.
pub const WISP_MARKERS: [&str; 4] = ["polecat_started", "polecat_done", "start_work", "nudge"];

/// Unique message identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Create a new message ID
    pub fn new() -> Self {
        Self(format!(
            "msg-{}-{}",
            Utc::now().format("%Y%m%d%H%M%S"),
            unique_suffix()
        ))
    }

    /// Create from an existing string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_suffix() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}{:04x}", nanos, counter)
}

/// A mail message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub from: String,
    pub to: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    /// Explicitly ephemeral
    #[serde(default)]
    pub wisp: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(from: impl Into<String>, to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: String::new(),
            wisp: false,
            timestamp: Utc::now(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Mark the message ephemeral regardless of its subject
    pub fn as_wisp(mut self) -> Self {
        self.wisp = true;
        self
    }

    /// Whether the message should be stored as a wisp rather than durable mail
    pub fn is_ephemeral(&self) -> bool {
        self.wisp || is_wisp_subject(&self.subject)
    }

    /// Whether the sender is mailing itself
    pub fn is_self_mail(&self) -> bool {
        same_identity(&self.from, &self.to)
    }
}

/// Whether a subject starts with one of the [`WISP_MARKERS`]
pub fn is_wisp_subject(subject: &str) -> bool {
    let subject = subject.to_lowercase();
    WISP_MARKERS
        .iter()
        .any(|marker| subject.starts_with(marker))
}
