//! Configuration system
//!
//! The legacy file-based messaging store: named lists, queues, announce
//! channels and nudge channels kept in `<town_root>/config/messaging.json`.

mod messaging_config;
pub mod validation;

pub use messaging_config::{
    messaging_config_path, AnnounceConfig, MessagingConfig, QueueConfig,
    CURRENT_MESSAGING_VERSION, MESSAGING_CONFIG_TYPE,
};
pub use validation::{validate_messaging_config, validate_messaging_config_result, ValidationError};
