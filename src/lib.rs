//! Mailroute - address resolution for multi-agent mail
//!
//! Agents in a town address each other with short, human-readable names:
//! `gastown/crew/max`, `@witnesses`, `queue:work`, `ops`. This crate turns
//! those names into concrete delivery targets and supplies the identity
//! machinery the message router needs around them.
//!
//! # Architecture
//!
//! - **mail**: Address grammar, resolution, group expansion, identifier codec,
//!   identity comparison and wisp classification
//! - **session**: Rig short-prefix registry and session candidate lookup
//! - **config**: Legacy file-based messaging config (lists, queues, announces)
//! - **logging**: tracing subscriber setup
//!
//! The bead registry that stores groups, queues, channels and agents lives in
//! the `beads` crate and is consumed through its `Registry` trait.
//!
//! # Example
//!
//! ```
//! use beads::MemoryRegistry;
//! use mailroute::mail::Resolver;
//!
//! let registry = MemoryRegistry::new().with_group("ops", ["mayor/", "gastown/witness"]);
//! let resolver = Resolver::new().with_registry(&registry);
//!
//! let recipients = resolver.resolve("ops").unwrap();
//! assert_eq!(recipients.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod mail;
pub mod session;

// Re-exports
pub use error::{MailrouteError, Result};
