//! Mail addressing
//!
//! Resolves the addresses agents write on messages into delivery targets,
//! and converts between mail addresses and tracked agent identifiers.
//!
//! # Addressing
//!
//! - `gastown/crew/max`, `gastown/witness`, `mayor/` - a specific agent
//! - `*/witness` - every agent matching a one-segment-per-`*` pattern
//! - `group:ops`, `queue:work`, `channel:alerts` - explicit native targets
//! - `@ops` - a native group, or a built-in pattern like `@town` or `@rig/gastown`
//! - `ops` - a bare name, looked up across groups, queues and channels
//! - `list:oncall`, `announce:alerts` - legacy targets handled by the router
//!
//! # Wisps
//!
//! Lifecycle notifications (`POLECAT_DONE`, `NUDGE`, ...) are ephemeral; see
//! [`Message::is_ephemeral`].

mod address;
pub mod codec;
mod identity;
mod message;
mod pattern;
mod recipient;
mod resolve;

pub use address::{
    is_announce_address, is_channel_address, is_group_address, is_list_address,
    is_queue_address, is_town_level_address, parse_announce_name, parse_channel_name,
    parse_list_name, parse_queue_name, AddressKind, GroupAddress, GroupKind,
};
pub use codec::{
    address_from_description, address_to_identifier, descriptor_to_address,
    identifier_to_address,
};
pub use identity::{canonical_identity, same_identity};
pub use message::{is_wisp_subject, Message, MessageId, WISP_MARKERS};
pub use pattern::{is_pattern, match_pattern};
pub use recipient::{Recipient, RecipientType};
pub use resolve::Resolver;
