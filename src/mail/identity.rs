//! Sender/recipient identity comparison

/// Canonical identity of an address.
///
/// Trims a single trailing `/` and drops the `crew`, `polecats` or `polecat`
/// infix of a rig-qualified worker, so `gastown/crew/max`, `gastown/polecats/max`
/// and `gastown/max` share one identity.
pub fn canonical_identity(address: &str) -> String {
    let address = address.strip_suffix('/').unwrap_or(address);

    let mut parts = address.splitn(3, '/');
    if let (Some(rig), Some(role), Some(name)) = (parts.next(), parts.next(), parts.next()) {
        if matches!(role, "crew" | "polecats" | "polecat") && !name.contains('/') {
            return format!("{}/{}", rig, name);
        }
    }
    address.to_string()
}

/// Whether two addresses name the same identity.
///
/// Two empty addresses are the same (sender unknown on both sides).
pub fn same_identity(a: &str, b: &str) -> bool {
    canonical_identity(a) == canonical_identity(b)
}
