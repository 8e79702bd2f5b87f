//! Configuration validation
//!
//! Validates messaging configuration for correctness:
//! - Known config type and a supported version
//! - Every list, queue, announce and nudge channel has at least one member
//! - Counts are non-negative

use super::messaging_config::{MessagingConfig, CURRENT_MESSAGING_VERSION, MESSAGING_CONFIG_TYPE};
use crate::MailrouteError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub context: Option<String>,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: None,
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref ctx) = self.context {
            write!(f, "[{}] {}: {}", ctx, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a messaging configuration, collecting every problem
pub fn validate_messaging_config(config: &MessagingConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !config.config_type.is_empty() && config.config_type != MESSAGING_CONFIG_TYPE {
        errors.push(ValidationError::new(
            "type",
            format!(
                "expected type '{}', got '{}'",
                MESSAGING_CONFIG_TYPE, config.config_type
            ),
        ));
    }

    if config.version > CURRENT_MESSAGING_VERSION {
        errors.push(ValidationError::new(
            "version",
            format!(
                "got {}, max supported {}",
                config.version, CURRENT_MESSAGING_VERSION
            ),
        ));
    }

    for (name, recipients) in &config.lists {
        if recipients.is_empty() {
            errors.push(ValidationError::new("lists", "list has no recipients").with_context(name));
        }
    }

    for (name, queue) in &config.queues {
        if queue.workers.is_empty() {
            errors.push(ValidationError::new("queues.workers", "queue has no workers").with_context(name));
        }
        if queue.max_claims < 0 {
            errors.push(
                ValidationError::new("queues.max_claims", "max_claims must be non-negative")
                    .with_context(name),
            );
        }
    }

    for (name, announce) in &config.announces {
        if announce.readers.is_empty() {
            errors.push(
                ValidationError::new("announces.readers", "announce has no readers")
                    .with_context(name),
            );
        }
        if announce.retain_count < 0 {
            errors.push(
                ValidationError::new("announces.retain_count", "retain_count must be non-negative")
                    .with_context(name),
            );
        }
    }

    for (name, recipients) in &config.nudge_channels {
        if name.is_empty() {
            errors.push(ValidationError::new(
                "nudge_channels",
                "nudge channel name cannot be empty",
            ));
        }
        if recipients.is_empty() {
            errors.push(
                ValidationError::new("nudge_channels", "nudge channel has no recipients")
                    .with_context(name),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate configuration and return a Result
pub fn validate_messaging_config_result(config: &MessagingConfig) -> crate::Result<()> {
    validate_messaging_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        MailrouteError::Config(format!(
            "Messaging config validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}
