//! Rig short-prefix registry
//!
//! Maps abbreviated namespace codes ("gt", "bd") to the full rig names they
//! stand in for. Instances are owned by the caller and passed by reference into
//! every function that needs them; tests build a fresh registry instead of
//! swapping a global one.

use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix used for rig-level names when a rig has no registered prefix
pub const DEFAULT_PREFIX: &str = "gt";

/// A single line of `.beads/routes.jsonl`
#[derive(Debug, Clone, Deserialize)]
struct Route {
    prefix: String,
    path: String,
}

/// Bidirectional short-prefix ↔ rig-name registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRegistry {
    prefix_to_rig: HashMap<String, String>,
    rig_to_prefix: HashMap<String, String>,
}

impl PrefixRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prefix for a rig. A trailing `-` on the prefix is ignored.
    pub fn register(&mut self, prefix: &str, rig: &str) {
        let prefix = prefix.trim_end_matches('-');
        if prefix.is_empty() || rig.is_empty() {
            return;
        }
        self.prefix_to_rig
            .insert(prefix.to_string(), rig.to_string());
        self.rig_to_prefix
            .insert(rig.to_string(), prefix.to_string());
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, prefix: &str, rig: &str) -> Self {
        self.register(prefix, rig);
        self
    }

    /// Short prefix registered for a rig
    pub fn prefix_for(&self, rig: &str) -> Option<&str> {
        self.rig_to_prefix.get(rig).map(String::as_str)
    }

    /// Short prefix for a rig, or [`DEFAULT_PREFIX`] when unregistered
    pub fn prefix_or_default(&self, rig: &str) -> &str {
        self.prefix_for(rig).unwrap_or(DEFAULT_PREFIX)
    }

    /// Rig name for a prefix; an unknown prefix stands for itself
    pub fn rig_for_prefix<'a>(&'a self, prefix: &'a str) -> &'a str {
        self.prefix_to_rig
            .get(prefix)
            .map(String::as_str)
            .unwrap_or(prefix)
    }

    /// All registered rig names
    pub fn rigs(&self) -> impl Iterator<Item = &str> {
        self.rig_to_prefix.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefix_to_rig.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix_to_rig.is_empty()
    }

    /// Build a registry from `routes.jsonl` content.
    ///
    /// Each line is `{"prefix": "gt-", "path": "gastown/mayor/rig"}`; the rig
    /// name is the first path segment. Town-level routes (`hq-` prefix or a `.`
    /// path) are skipped. Blank lines are ignored.
    pub fn from_routes(content: &str) -> Result<Self> {
        let mut registry = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let route: Route = serde_json::from_str(line)?;
            if route.prefix.starts_with("hq") || route.path == "." {
                continue;
            }
            if let Some(rig) = route.path.split('/').find(|s| !s.is_empty() && *s != ".") {
                registry.register(&route.prefix, rig);
            }
        }
        Ok(registry)
    }

    /// Load `<town_root>/.beads/routes.jsonl`
    pub fn load_routes(town_root: impl AsRef<Path>) -> Result<Self> {
        let path = routes_path(town_root);
        tracing::debug!(path = %path.display(), "Loading rig prefix routes");
        let content = fs::read_to_string(&path)?;
        let registry = Self::from_routes(&content)?;
        tracing::debug!(rigs = registry.len(), "Rig prefixes loaded");
        Ok(registry)
    }
}

/// Standard location of the routes file in a town
pub fn routes_path(town_root: impl AsRef<Path>) -> PathBuf {
    town_root.as_ref().join(".beads").join("routes.jsonl")
}
