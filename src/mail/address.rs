//! Mail address grammar
//!
//! Classifies raw address strings so resolution can dispatch with a single
//! match. The grammar, in precedence order:
//!
//! 1. `group:x`, `queue:x`, `channel:x` - explicit type prefix
//! 2. `list:x`, `announce:x` - legacy prefixes, passed through to the router
//! 3. anything containing `/` - an agent address (`rig/role/name`, `rig/name`,
//!    `mayor/`), or a wildcard pattern when it also contains `*`
//! 4. `@x` - native group shorthand or a built-in group pattern
//! 5. a bare name, looked up across the group, queue and channel namespaces
//!
//! # Examples
//!
//! ```
//! use mailroute::mail::{AddressKind, GroupAddress, GroupKind};
//!
//! assert_eq!(AddressKind::classify("queue:work"), AddressKind::Queue("work"));
//! assert_eq!(AddressKind::classify("*/witness"), AddressKind::Pattern("*/witness"));
//!
//! let group = GroupAddress::parse("@crew/gastown").unwrap();
//! assert_eq!(group.kind, GroupKind::RigRole);
//! assert_eq!(group.rig.as_deref(), Some("gastown"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

const GROUP_PREFIX: &str = "group:";
const QUEUE_PREFIX: &str = "queue:";
const CHANNEL_PREFIX: &str = "channel:";
const LIST_PREFIX: &str = "list:";
const ANNOUNCE_PREFIX: &str = "announce:";

/// Syntactic class of a raw address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind<'a> {
    /// `group:<name>`
    Group(&'a str),
    /// `queue:<name>`
    Queue(&'a str),
    /// `channel:<name>`
    Channel(&'a str),
    /// `list:` or `announce:`; delivery semantics belong to the router
    Legacy(&'a str),
    /// Path-style address containing `*`
    Pattern(&'a str),
    /// Path-style agent address
    Agent(&'a str),
    /// `@<name>`, carrying the name without the `@`
    At(&'a str),
    /// Bare name needing namespace lookup
    Name(&'a str),
}

impl<'a> AddressKind<'a> {
    /// Classify an address; the first matching rule wins
    pub fn classify(address: &'a str) -> Self {
        if let Some(name) = address.strip_prefix(GROUP_PREFIX) {
            AddressKind::Group(name)
        } else if let Some(name) = address.strip_prefix(QUEUE_PREFIX) {
            AddressKind::Queue(name)
        } else if let Some(name) = address.strip_prefix(CHANNEL_PREFIX) {
            AddressKind::Channel(name)
        } else if is_list_address(address) || is_announce_address(address) {
            AddressKind::Legacy(address)
        } else if address.contains('/') {
            if address.contains('*') {
                AddressKind::Pattern(address)
            } else {
                AddressKind::Agent(address)
            }
        } else if let Some(name) = address.strip_prefix('@') {
            AddressKind::At(name)
        } else {
            AddressKind::Name(address)
        }
    }
}

/// Kind of built-in `@` group pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    /// `@overseer` - human operator
    Overseer,
    /// `@town` - all town-level agents
    Town,
    /// `@witnesses`, `@dogs`, ... - every agent of a role
    Role,
    /// `@crew/<rig>`, `@polecats/<rig>` - a role within one rig
    RigRole,
    /// `@rig/<rig>` - every agent in a rig
    Rig,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Overseer => write!(f, "overseer"),
            GroupKind::Town => write!(f, "town"),
            GroupKind::Role => write!(f, "role"),
            GroupKind::RigRole => write!(f, "rig-role"),
            GroupKind::Rig => write!(f, "rig"),
        }
    }
}

/// A parsed built-in `@` group pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAddress {
    pub kind: GroupKind,
    /// witness, crew, polecat, dog, ...
    pub role_type: Option<String>,
    pub rig: Option<String>,
    /// The `@` string this was parsed from
    pub original: String,
}

impl GroupAddress {
    fn new(kind: GroupKind, original: &str) -> Self {
        Self {
            kind,
            role_type: None,
            rig: None,
            original: original.to_string(),
        }
    }

    fn with_role(mut self, role_type: &str) -> Self {
        self.role_type = Some(role_type.to_string());
        self
    }

    fn with_rig(mut self, rig: &str) -> Self {
        self.rig = Some(rig.to_string());
        self
    }

    /// Parse a built-in group pattern.
    ///
    /// Returns `None` for anything that is not exactly one of the supported
    /// forms; there is no partial result.
    pub fn parse(address: &str) -> Option<Self> {
        let group = address.strip_prefix('@')?;

        match group {
            "overseer" => return Some(Self::new(GroupKind::Overseer, address)),
            "town" => return Some(Self::new(GroupKind::Town, address)),
            "witnesses" => return Some(Self::new(GroupKind::Role, address).with_role("witness")),
            "dogs" => return Some(Self::new(GroupKind::Role, address).with_role("dog")),
            "refineries" => {
                return Some(Self::new(GroupKind::Role, address).with_role("refinery"))
            }
            "deacons" => return Some(Self::new(GroupKind::Role, address).with_role("deacon")),
            _ => {}
        }

        let (prefix, qualifier) = group.split_once('/')?;
        if qualifier.is_empty() {
            return None;
        }

        match prefix {
            "rig" => Some(Self::new(GroupKind::Rig, address).with_rig(qualifier)),
            "crew" => Some(
                Self::new(GroupKind::RigRole, address)
                    .with_role("crew")
                    .with_rig(qualifier),
            ),
            "polecats" => Some(
                Self::new(GroupKind::RigRole, address)
                    .with_role("polecat")
                    .with_rig(qualifier),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// `@`-prefixed group address
pub fn is_group_address(address: &str) -> bool {
    address.starts_with('@')
}

pub fn is_list_address(address: &str) -> bool {
    address.starts_with(LIST_PREFIX)
}

pub fn parse_list_name(address: &str) -> &str {
    address.strip_prefix(LIST_PREFIX).unwrap_or(address)
}

pub fn is_queue_address(address: &str) -> bool {
    address.starts_with(QUEUE_PREFIX)
}

pub fn parse_queue_name(address: &str) -> &str {
    address.strip_prefix(QUEUE_PREFIX).unwrap_or(address)
}

pub fn is_announce_address(address: &str) -> bool {
    address.starts_with(ANNOUNCE_PREFIX)
}

pub fn parse_announce_name(address: &str) -> &str {
    address.strip_prefix(ANNOUNCE_PREFIX).unwrap_or(address)
}

pub fn is_channel_address(address: &str) -> bool {
    address.starts_with(CHANNEL_PREFIX)
}

pub fn parse_channel_name(address: &str) -> &str {
    address.strip_prefix(CHANNEL_PREFIX).unwrap_or(address)
}

/// Town-level agents (mayor, deacon) and the overseer
pub fn is_town_level_address(address: &str) -> bool {
    matches!(
        address.strip_suffix('/').unwrap_or(address),
        "mayor" | "deacon" | "overseer"
    )
}
