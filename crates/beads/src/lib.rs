//! Beads registry client for Rust
//!
//! A type-safe, read-only view of the group, queue, channel and agent beads that
//! a messaging layer resolves addresses against.
//!
//! # Example
//!
//! ```no_run
//! use beads::{Beads, Registry};
//!
//! let bd = Beads::new()?;
//!
//! // Look up a named group
//! if let Some(group) = bd.lookup_group("oncall")? {
//!     println!("{} has {} members", group.name, group.members.len());
//! }
//!
//! // List tracked agents
//! for (id, agent) in bd.list_agents()? {
//!     println!("{id}: {:?}", agent.description);
//! }
//! # Ok::<(), beads::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::process::{Command, Output};
use thiserror::Error;

/// Label carried by agent beads
pub const AGENT_LABEL: &str = "gt:agent";
/// Label carried by group beads
pub const GROUP_LABEL: &str = "gt:group";
/// Label carried by queue beads
pub const QUEUE_LABEL: &str = "gt:queue";
/// Label carried by channel beads
pub const CHANNEL_LABEL: &str = "gt:channel";

/// Errors that can occur when interacting with beads
#[derive(Error, Debug)]
pub enum Error {
    #[error("bd is not installed or not in PATH")]
    NotInstalled,

    #[error("Not in a beads-enabled repository")]
    NotInRepo,

    #[error("Failed to execute bd command: {0}")]
    CommandFailed(String),

    #[error("Failed to parse output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for beads operations
pub type Result<T> = std::result::Result<T, Error>;

/// Read a `key: value` metadata line from free-form description text.
///
/// Lines are trimmed before matching. When a key appears more than once the
/// last occurrence wins. The literal value `null` is returned as-is; callers
/// decide what it means.
pub fn metadata_value<'a>(description: &'a str, key: &str) -> Option<&'a str> {
    let mut found = None;
    for line in description.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(key) {
            if let Some(value) = rest.strip_prefix(':') {
                found = Some(value.trim());
            }
        }
    }
    found
}

/// Like [`metadata_value`], but treats empty and `null` as absent.
fn metadata_present<'a>(description: &'a str, key: &str) -> Option<&'a str> {
    metadata_value(description, key).filter(|v| !v.is_empty() && *v != "null")
}

/// Split a comma-separated metadata list, dropping empty entries
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// A raw bead as returned by `bd list --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Issue {
    /// Whether this bead is live (closed and tombstoned beads are not)
    pub fn is_active(&self) -> bool {
        matches!(self.status.as_str(), "open" | "in_progress" | "")
    }

    fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// A tracked agent
///
/// The description may embed `role_type:`, `rig:` and `location:` lines that
/// identify where the agent receives mail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBead {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl AgentBead {
    /// Create an agent with no description
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Attach description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Read a metadata field from the description
    pub fn field(&self, key: &str) -> Option<&str> {
        self.description
            .as_deref()
            .and_then(|d| metadata_value(d, key))
    }
}

impl From<Issue> for AgentBead {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            description: issue.description,
        }
    }
}

/// A named group of addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFields {
    pub name: String,
    /// Members in declaration order; each is an address, queue spec or group name
    pub members: Vec<String>,
}

impl GroupFields {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Parse group fields from a bead description
    pub fn parse(description: &str) -> Self {
        Self {
            name: metadata_present(description, "name")
                .unwrap_or_default()
                .to_string(),
            members: metadata_present(description, "members")
                .map(split_list)
                .unwrap_or_default(),
        }
    }
}

/// A claimable work queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueFields {
    pub name: String,
    /// Who may claim from the queue (e.g., "gastown/polecats/*")
    pub claim_pattern: String,
    /// active, paused, closed
    pub status: String,
    /// 0 means unlimited
    pub max_concurrency: u32,
}

impl QueueFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            claim_pattern: "*".to_string(),
            status: "active".to_string(),
            max_concurrency: 0,
        }
    }

    /// Parse queue fields from a bead description
    pub fn parse(description: &str) -> Self {
        let mut fields = Self::new(metadata_present(description, "name").unwrap_or_default());
        if let Some(pattern) = metadata_present(description, "claim_pattern") {
            fields.claim_pattern = pattern.to_string();
        }
        if let Some(status) = metadata_present(description, "status") {
            fields.status = status.to_string();
        }
        if let Some(max) = metadata_present(description, "max_concurrency") {
            fields.max_concurrency = max.parse().unwrap_or(0);
        }
        fields
    }
}

/// A broadcast channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelFields {
    pub name: String,
    pub subscribers: Vec<String>,
    /// Number of messages retained; 0 means unlimited
    pub retention_count: u32,
}

impl ChannelFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse channel fields from a bead description
    pub fn parse(description: &str) -> Self {
        Self {
            name: metadata_present(description, "name")
                .unwrap_or_default()
                .to_string(),
            subscribers: metadata_present(description, "subscribers")
                .map(split_list)
                .unwrap_or_default(),
            retention_count: metadata_present(description, "retention_count")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

/// Read-only lookups a messaging layer needs from the bead store
pub trait Registry {
    /// Find a group by its name
    fn lookup_group(&self, name: &str) -> Result<Option<GroupFields>>;

    /// Find a queue by its name
    fn lookup_queue(&self, name: &str) -> Result<Option<QueueFields>>;

    /// Find a channel by its name
    fn lookup_channel(&self, name: &str) -> Result<Option<ChannelFields>>;

    /// All active agents, keyed by bead ID
    fn list_agents(&self) -> Result<BTreeMap<String, AgentBead>>;
}

/// Beads CLI-backed registry
#[derive(Debug, Clone, Default)]
pub struct Beads {
    /// Working directory
    workdir: Option<PathBuf>,
}

impl Beads {
    /// Create a new Beads instance
    pub fn new() -> Result<Self> {
        let bd = Self::default();
        if !bd.is_available() {
            return Err(Error::NotInstalled);
        }
        Ok(bd)
    }

    /// Create with a specific working directory
    pub fn with_workdir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }

    /// Check if bd is available
    pub fn is_available(&self) -> bool {
        self.run_command(&["--version"]).is_ok()
    }

    /// List active beads carrying a label
    pub fn list_labeled(&self, label: &str) -> Result<Vec<Issue>> {
        let label_arg = format!("--label={}", label);
        let output = self.run_command(&["list", &label_arg, "--json", "--limit=0"])?;
        let issues = parse_issue_list(&output)?;
        Ok(issues.into_iter().filter(Issue::is_active).collect())
    }

    /// Run bd and return its stdout
    fn run_command(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("bd");
        cmd.args(args);

        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        command_stdout(cmd.output()?)
    }
}

/// Stdout of a finished bd process, or an error if it exited non-zero
fn command_stdout(output: Output) -> Result<String> {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.contains("not initialized") || stderr.contains("No .beads") {
        return Err(Error::NotInRepo);
    }
    if stderr.is_empty() {
        return Err(Error::CommandFailed(format!(
            "bd exited with {}",
            output.status
        )));
    }
    Err(Error::CommandFailed(stderr))
}

/// Parse `bd list --json` output; empty output is an empty list
pub fn parse_issue_list(stdout: &str) -> Result<Vec<Issue>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).map_err(Error::from)
}

impl Registry for Beads {
    fn lookup_group(&self, name: &str) -> Result<Option<GroupFields>> {
        Ok(self
            .list_labeled(GROUP_LABEL)?
            .iter()
            .map(|issue| GroupFields::parse(issue.description_text()))
            .find(|fields| fields.name == name))
    }

    fn lookup_queue(&self, name: &str) -> Result<Option<QueueFields>> {
        Ok(self
            .list_labeled(QUEUE_LABEL)?
            .iter()
            .map(|issue| QueueFields::parse(issue.description_text()))
            .find(|fields| fields.name == name))
    }

    fn lookup_channel(&self, name: &str) -> Result<Option<ChannelFields>> {
        Ok(self
            .list_labeled(CHANNEL_LABEL)?
            .iter()
            .map(|issue| ChannelFields::parse(issue.description_text()))
            .find(|fields| fields.name == name))
    }

    fn list_agents(&self) -> Result<BTreeMap<String, AgentBead>> {
        Ok(self
            .list_labeled(AGENT_LABEL)?
            .into_iter()
            .map(|issue| (issue.id.clone(), AgentBead::from(issue)))
            .collect())
    }
}

/// In-memory registry, for tests and for embedding without a bd install
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    groups: HashMap<String, GroupFields>,
    queues: HashMap<String, QueueFields>,
    channels: HashMap<String, ChannelFields>,
    agents: BTreeMap<String, AgentBead>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group with the given members
    pub fn with_group<S: Into<String>>(
        mut self,
        name: &str,
        members: impl IntoIterator<Item = S>,
    ) -> Self {
        let members = members.into_iter().map(Into::into).collect();
        self.groups
            .insert(name.to_string(), GroupFields::new(name, members));
        self
    }

    /// Add a queue
    pub fn with_queue(mut self, name: &str) -> Self {
        self.queues.insert(name.to_string(), QueueFields::new(name));
        self
    }

    /// Add a channel
    pub fn with_channel(mut self, name: &str) -> Self {
        self.channels
            .insert(name.to_string(), ChannelFields::new(name));
        self
    }

    /// Add an agent
    pub fn with_agent(mut self, agent: AgentBead) -> Self {
        self.agents.insert(agent.id.clone(), agent);
        self
    }
}

impl Registry for MemoryRegistry {
    fn lookup_group(&self, name: &str) -> Result<Option<GroupFields>> {
        Ok(self.groups.get(name).cloned())
    }

    fn lookup_queue(&self, name: &str) -> Result<Option<QueueFields>> {
        Ok(self.queues.get(name).cloned())
    }

    fn lookup_channel(&self, name: &str) -> Result<Option<ChannelFields>> {
        Ok(self.channels.get(name).cloned())
    }

    fn list_agents(&self) -> Result<BTreeMap<String, AgentBead>> {
        Ok(self.agents.clone())
    }
}
