//! Session and agent identifier names
//!
//! Town-level agents live in the `hq-` namespace; rig-level agents are named
//! under their rig's short prefix.

/// Prefix for town-level services (mayor, deacon, overseer)
pub const HQ_PREFIX: &str = "hq-";

pub fn mayor_session_name() -> String {
    format!("{}mayor", HQ_PREFIX)
}

pub fn deacon_session_name() -> String {
    format!("{}deacon", HQ_PREFIX)
}

/// The overseer is the human operator, not an AI agent
pub fn overseer_session_name() -> String {
    format!("{}overseer", HQ_PREFIX)
}

/// `<prefix>-<rig>-witness`
pub fn witness_session_name(prefix: &str, rig: &str) -> String {
    format!("{}-{}-witness", prefix, rig)
}

/// `<prefix>-<rig>-refinery`
pub fn refinery_session_name(prefix: &str, rig: &str) -> String {
    format!("{}-{}-refinery", prefix, rig)
}

/// `<prefix>-crew-<name>`
pub fn crew_session_name(prefix: &str, name: &str) -> String {
    format!("{}-crew-{}", prefix, name)
}

/// `<prefix>-<name>`; polecats carry no role infix
pub fn polecat_session_name(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name)
}
