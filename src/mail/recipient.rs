//! Resolved delivery targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of delivery target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    /// Direct to an agent (or a pass-through address the router interprets)
    Agent,
    /// Single message, workers claim
    Queue,
    /// Broadcast, retained
    Channel,
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipientType::Agent => write!(f, "agent"),
            RecipientType::Queue => write!(f, "queue"),
            RecipientType::Channel => write!(f, "channel"),
        }
    }
}

/// A resolved message recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Canonical resolved address (e.g., "gastown/crew/max", "queue:work")
    pub address: String,

    #[serde(rename = "type")]
    pub recipient_type: RecipientType,

    /// Unprefixed name, for queues and channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

impl Recipient {
    pub fn agent(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            recipient_type: RecipientType::Agent,
            original_name: None,
        }
    }

    /// `queue:<name>`
    pub fn queue(name: &str) -> Self {
        Self {
            address: format!("queue:{}", name),
            recipient_type: RecipientType::Queue,
            original_name: Some(name.to_string()),
        }
    }

    /// `channel:<name>`
    pub fn channel(name: &str) -> Self {
        Self {
            address: format!("channel:{}", name),
            recipient_type: RecipientType::Channel,
            original_name: Some(name.to_string()),
        }
    }

    pub fn is_agent(&self) -> bool {
        self.recipient_type == RecipientType::Agent
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
