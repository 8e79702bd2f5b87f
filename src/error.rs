//! Error types for mailroute
//!
//! Defines the error enum covering every failure an address resolution can
//! surface to its caller. Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Result type alias for mailroute operations
pub type Result<T> = std::result::Result<T, MailrouteError>;

/// Error type for mailroute operations
#[derive(Error, Debug)]
pub enum MailrouteError {
    /// Bare name matched no group, queue or channel
    #[error("unknown address: {0} (not a group, queue, or channel)")]
    UnknownAddress(String),

    /// Bare name matched more than one namespace
    #[error(
        "ambiguous address {name:?}: matches multiple types. Use explicit prefix: {}",
        .alternatives.join(", ")
    )]
    AmbiguousAddress {
        name: String,
        /// Explicit-prefix forms the caller can resubmit (group:x, queue:x, channel:x)
        alternatives: Vec<String>,
    },

    /// Wildcard pattern expanded to zero agents
    #[error("no agents match pattern: {0}")]
    NoPatternMatch(String),

    /// An operation needed the bead registry but none is configured
    #[error("beads registry not available")]
    RegistryUnavailable,

    /// Explicit group: address named a group that does not exist
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// Legacy list: address named a list that does not exist
    #[error("mailing list not found: {0}")]
    ListNotFound(String),

    /// Address is not one of the built-in @ patterns
    #[error("invalid group address: {0}")]
    InvalidGroupAddress(String),

    /// No tracked agent answers to this identity
    #[error("no agent found for {0}")]
    RecipientNotFound(String),

    /// Registry lookup failed
    #[error("registry error: {0}")]
    Registry(#[from] beads::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MailrouteError {
    /// Whether resubmitting with an explicit prefix can fix this error
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, MailrouteError::AmbiguousAddress { .. })
    }

    /// Explicit-prefix alternatives for an ambiguous address, empty otherwise
    pub fn alternatives(&self) -> &[String] {
        match self {
            MailrouteError::AmbiguousAddress { alternatives, .. } => alternatives,
            _ => &[],
        }
    }
}
