//! Agent identifier ↔ mail address conversion
//!
//! The two directions are not inverses of each other. Identifiers
//! name the worker kind (`gt-gastown-crew-max`), while mail addresses usually
//! drop it (`gastown/max`). Each function documents its own mapping; do not
//! expect a round trip to reproduce the input.

use crate::session::names::{
    crew_session_name, deacon_session_name, mayor_session_name, polecat_session_name,
    refinery_session_name, witness_session_name,
};
use crate::session::PrefixRegistry;
use beads::{metadata_value, AgentBead};

const RIG_PREFIX: &str = "gt-";
const TOWN_PREFIX: &str = "hq-";

/// Roles that exist once per rig and never carry a name segment
const SINGLETON_ROLES: [&str; 2] = ["witness", "refinery"];
/// Roles whose identifiers end in a worker name
const NAMED_ROLES: [&str; 2] = ["crew", "polecat"];

/// Convert a bare identifier to an address by position.
///
/// Only `gt-` and `hq-` identifiers are understood; anything else yields an
/// empty string.
///
/// - `hq-mayor` → `mayor/`
/// - `gt-gastown-witness` → `gastown/witness`
/// - `gt-gastown-crew-max-v2` → `gastown/crew/max-v2`
pub fn identifier_to_address(id: &str) -> String {
    let Some(rest) = id
        .strip_prefix(RIG_PREFIX)
        .or_else(|| id.strip_prefix(TOWN_PREFIX))
    else {
        return String::new();
    };

    let parts: Vec<&str> = rest.split('-').collect();
    match parts.as_slice() {
        [town] => format!("{}/", town),
        [rig, role] => format!("{}/{}", rig, role),
        [rig, role, name @ ..] => format!("{}/{}/{}", rig, role, name.join("-")),
        [] => String::new(),
    }
}

/// Convert a tracked agent to the address it receives mail at.
///
/// Worker addresses drop the role infix: `gt-gastown-crew-max` becomes
/// `gastown/max`. Identifiers outside the `gt-` namespace are read from the
/// description metadata when it is complete, and parsed positionally otherwise.
pub fn descriptor_to_address(agent: Option<&AgentBead>) -> String {
    let Some(agent) = agent else {
        return String::new();
    };
    let id = agent.id.as_str();
    if id.is_empty() {
        return String::new();
    }

    if let Some(rest) = id.strip_prefix(TOWN_PREFIX) {
        return match rest {
            "mayor" => "mayor/".to_string(),
            "deacon" => "deacon/".to_string(),
            _ => address_from_description(agent.description.as_deref().unwrap_or_default()),
        };
    }

    match id.strip_prefix(RIG_PREFIX) {
        Some(rest) => rig_identifier_to_address(rest),
        None => prefixed_agent_to_address(agent),
    }
}

/// Address of a `gt-<rig>-<role>[-<name>]` identifier, prefix already stripped.
///
/// Role markers are scanned from the right so hyphenated rig names survive.
fn rig_identifier_to_address(rest: &str) -> String {
    let parts: Vec<&str> = rest.split('-').collect();

    if parts.len() == 1 {
        return format!("{}/", parts[0]);
    }

    for i in (1..parts.len()).rev() {
        match parts[i] {
            role @ ("witness" | "refinery") => {
                if i + 1 < parts.len() {
                    // A singleton with a name segment is malformed
                    return String::new();
                }
                return format!("{}/{}", parts[..i].join("-"), role);
            }
            "crew" | "polecat" => {
                let rig = parts[..i].join("-");
                return format!("{}/{}", rig, parts[i + 1..].join("-"));
            }
            "dog" => return format!("dog/{}", parts[i + 1..].join("-")),
            _ => {}
        }
    }

    if parts.len() == 2 {
        return format!("{}/{}", parts[0], parts[1]);
    }
    String::new()
}

/// Address of an agent whose identifier uses a rig-specific prefix
/// (`bd-beads-crew-beavis`, `ppf-pyspark_pipeline_framework-witness`).
fn prefixed_agent_to_address(agent: &AgentBead) -> String {
    let description = agent.description.as_deref().unwrap_or_default();

    if let Some(location) = present(metadata_value(description, "location")) {
        return location.to_string();
    }

    let role_type = present(metadata_value(description, "role_type"));
    let rig = present(metadata_value(description, "rig"));
    let (Some(role_type), Some(rig)) = (role_type, rig) else {
        return address_from_identifier_position(&agent.id);
    };

    if SINGLETON_ROLES.contains(&role_type) {
        return format!("{}/{}", rig, role_type);
    }

    // Named roles take the worker name from the identifier
    let marker = format!("-{}-", role_type);
    if let Some(idx) = agent.id.find(&marker) {
        let name = &agent.id[idx + marker.len()..];
        if !name.is_empty() {
            return format!("{}/{}", rig, name);
        }
    }

    format!("{}/{}", rig, role_type)
}

/// Positional parse of `<prefix>-<rig>-<role>[-<name>]` when metadata is missing.
///
/// The prefix is opaque. The rig is everything between the first hyphen and
/// the role marker, so multi-word rig names are preserved.
fn address_from_identifier_position(id: &str) -> String {
    let Some(first_hyphen) = id.find('-') else {
        return String::new();
    };

    for role in NAMED_ROLES {
        let marker = format!("-{}-", role);
        let Some(idx) = id.find(&marker) else {
            continue;
        };
        if first_hyphen >= idx {
            continue;
        }
        let rig = &id[first_hyphen + 1..idx];
        let name = &id[idx + marker.len()..];
        if !rig.is_empty() && !name.is_empty() {
            return format!("{}/{}", rig, name);
        }
    }

    for role in SINGLETON_ROLES {
        if id.contains(&format!("-{}-", role)) {
            // witness/refinery followed by a name segment is malformed
            continue;
        }
        let Some(head) = id.strip_suffix(&format!("-{}", role)) else {
            continue;
        };
        if first_hyphen >= head.len() {
            continue;
        }
        let rig = &head[first_hyphen + 1..];
        if !rig.is_empty() {
            return format!("{}/{}", rig, role);
        }
    }

    String::new()
}

/// Read an agent address out of description metadata.
///
/// An explicit `location:` wins. Otherwise `role_type:` and `rig:` combine to
/// `<rig>/<role_type>`, or `<role_type>/` when the rig is absent or `null`.
pub fn address_from_description(description: &str) -> String {
    if let Some(location) = present(metadata_value(description, "location")) {
        return location.to_string();
    }

    let Some(role_type) = present(metadata_value(description, "role_type")) else {
        return String::new();
    };

    match present(metadata_value(description, "rig")) {
        Some(rig) => format!("{}/{}", rig, role_type),
        None => format!("{}/", role_type),
    }
}

/// Convert a mail address to the identifier its agent is tracked under.
///
/// Rig-level identifiers use the rig's registered short prefix; an
/// unregistered rig yields an empty string, as does `overseer` (a human with
/// no tracked identifier) and any malformed address.
///
/// - `mayor/` → `hq-mayor`
/// - `gastown/witness` → `gt-gastown-witness`
/// - `gastown/crew/max` → `gt-crew-max`
/// - `gastown/polecats/alpha`, `gastown/alpha` → `gt-alpha`
pub fn address_to_identifier(address: &str, prefixes: &PrefixRegistry) -> String {
    match address {
        "overseer" => return String::new(),
        "mayor" | "mayor/" => return mayor_session_name(),
        "deacon" | "deacon/" => return deacon_session_name(),
        _ => {}
    }

    let Some((rig, target)) = address.split_once('/') else {
        return String::new();
    };
    if target.is_empty() {
        return String::new();
    }
    let Some(prefix) = prefixes.prefix_for(rig) else {
        return String::new();
    };

    if let Some(name) = target.strip_prefix("crew/") {
        return named(name, |n| crew_session_name(prefix, n));
    }
    if let Some(name) = target.strip_prefix("polecats/") {
        return named(name, |n| polecat_session_name(prefix, n));
    }

    match target {
        "witness" => witness_session_name(prefix, rig),
        "refinery" => refinery_session_name(prefix, rig),
        name => polecat_session_name(prefix, name),
    }
}

/// Build a worker identifier, or nothing when the worker name is missing
fn named(name: &str, build: impl FnOnce(&str) -> String) -> String {
    if name.is_empty() {
        String::new()
    } else {
        build(name)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != "null")
}
