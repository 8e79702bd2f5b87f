//! Session candidates for a mail address
//!
//! The canonical worker address `rig/name` does not say whether the worker is
//! crew or a polecat, so a bare worker address yields both candidate handles in
//! a fixed order and the caller probes each in turn.

use super::names::{
    crew_session_name, deacon_session_name, mayor_session_name, overseer_session_name,
    polecat_session_name, refinery_session_name, witness_session_name,
};
use super::prefix::PrefixRegistry;

/// Possible session handles for an address, in probe order.
///
/// An empty result means the address cannot name a session.
///
/// - `overseer` → `hq-overseer`
/// - `mayor`, `mayor/` → `hq-mayor`; same for `deacon`
/// - `gastown/witness` → `gt-gastown-witness`
/// - `gastown/crew/max` → `gt-crew-max`
/// - `gastown/polecats/nux` → `gt-nux`
/// - `gastown/Toast` → `gt-crew-Toast`, then `gt-Toast`
pub fn candidates_for(address: &str, prefixes: &PrefixRegistry) -> Vec<String> {
    match address {
        "overseer" => return vec![overseer_session_name()],
        "mayor" | "mayor/" => return vec![mayor_session_name()],
        "deacon" | "deacon/" => return vec![deacon_session_name()],
        _ => {}
    }

    let Some((rig, target)) = address.split_once('/') else {
        return Vec::new();
    };
    if rig.is_empty() || target.is_empty() {
        return Vec::new();
    }

    let prefix = prefixes.prefix_or_default(rig);

    if let Some(name) = target.strip_prefix("crew/") {
        return single(name, |n| crew_session_name(prefix, n));
    }
    if let Some(name) = target.strip_prefix("polecats/") {
        return single(name, |n| polecat_session_name(prefix, n));
    }

    match target {
        "witness" => vec![witness_session_name(prefix, rig)],
        "refinery" => vec![refinery_session_name(prefix, rig)],
        name => vec![
            crew_session_name(prefix, name),
            polecat_session_name(prefix, name),
        ],
    }
}

fn single(name: &str, build: impl FnOnce(&str) -> String) -> Vec<String> {
    if name.is_empty() {
        Vec::new()
    } else {
        vec![build(name)]
    }
}
