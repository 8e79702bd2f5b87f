//! Address resolution
//!
//! Turns a raw address into the recipients a message fans out to. Native
//! groups, queues and channels come from the bead [`Registry`]; the legacy
//! messaging config under the town root is consulted for bare queue and
//! announce names.
//!
//! Resolution is read-only and keeps no state between calls. Group expansion
//! carries its own visited set, so concurrent resolutions never interfere.

use super::address::{AddressKind, GroupAddress, GroupKind};
use super::codec::{descriptor_to_address, identifier_to_address};
use super::pattern::match_pattern;
use super::recipient::Recipient;
use crate::config::{messaging_config_path, MessagingConfig};
use crate::error::{MailrouteError, Result};
use beads::{AgentBead, GroupFields, Registry};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolves addresses against a registry and the legacy messaging config
#[derive(Clone, Copy, Default)]
pub struct Resolver<'a> {
    registry: Option<&'a dyn Registry>,
    town_root: Option<&'a Path>,
}

impl<'a> Resolver<'a> {
    /// Resolver with no registry and no legacy config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: &'a dyn Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Town root holding `config/messaging.json`
    pub fn with_town_root(mut self, town_root: &'a Path) -> Self {
        self.town_root = Some(town_root);
        self
    }

    pub fn has_registry(&self) -> bool {
        self.registry.is_some()
    }

    /// Resolve an address to its recipients.
    ///
    /// Recipients come back in resolution order with no duplicates from
    /// group expansion. Errors are limited to the address itself: an unknown
    /// or ambiguous bare name, a wildcard matching nobody, or a missing
    /// registry when one is required.
    pub fn resolve(&self, address: &str) -> Result<Vec<Recipient>> {
        self.resolve_visiting(address, &mut HashSet::new())
    }

    fn resolve_visiting(
        &self,
        address: &str,
        visited: &mut HashSet<String>,
    ) -> Result<Vec<Recipient>> {
        let kind = AddressKind::classify(address);
        tracing::debug!(address, kind = ?kind, "Resolving address");

        match kind {
            AddressKind::Group(name) => self.resolve_group(name, visited),
            AddressKind::Queue(name) => Ok(vec![Recipient::queue(name)]),
            AddressKind::Channel(name) => Ok(vec![Recipient::channel(name)]),
            AddressKind::Legacy(address) | AddressKind::Agent(address) => {
                Ok(vec![Recipient::agent(address)])
            }
            AddressKind::Pattern(pattern) => self.resolve_pattern(pattern),
            AddressKind::At(name) => self.resolve_at(address, name, visited),
            AddressKind::Name(name) => self.resolve_by_name(name, visited),
        }
    }

    fn registry(&self) -> Result<&'a dyn Registry> {
        self.registry.ok_or(MailrouteError::RegistryUnavailable)
    }

    fn resolve_group(&self, name: &str, visited: &mut HashSet<String>) -> Result<Vec<Recipient>> {
        let fields = self
            .registry()?
            .lookup_group(name)?
            .ok_or_else(|| MailrouteError::GroupNotFound(name.to_string()))?;
        Ok(self.expand_group(name, &fields, visited))
    }

    /// Expand a wildcard against every tracked agent
    fn resolve_pattern(&self, pattern: &str) -> Result<Vec<Recipient>> {
        let agents = self.registry()?.list_agents()?;

        let recipients: Vec<Recipient> = agents
            .keys()
            .map(|id| identifier_to_address(id))
            .filter(|address| !address.is_empty() && match_pattern(pattern, address))
            .map(Recipient::agent)
            .collect();

        if recipients.is_empty() {
            return Err(MailrouteError::NoPatternMatch(pattern.to_string()));
        }
        Ok(recipients)
    }

    /// `@name`: a native group if one exists, otherwise passed through for
    /// the router to interpret as a built-in pattern
    fn resolve_at(
        &self,
        address: &str,
        name: &str,
        visited: &mut HashSet<String>,
    ) -> Result<Vec<Recipient>> {
        if let Some(registry) = self.registry {
            if let Some(fields) = registry.lookup_group(name)? {
                return Ok(self.expand_group(name, &fields, visited));
            }
        }

        if let Some(group) = GroupAddress::parse(address) {
            tracing::debug!(address, kind = %group.kind, "Passing built-in group to router");
        }
        Ok(vec![Recipient::agent(address)])
    }

    /// Bare name: look it up in every namespace and insist on exactly one hit
    fn resolve_by_name(&self, name: &str, visited: &mut HashSet<String>) -> Result<Vec<Recipient>> {
        let mut group = None;
        let mut is_queue = false;
        let mut is_channel = false;

        if let Some(registry) = self.registry {
            group = registry.lookup_group(name)?;
            is_queue = registry.lookup_queue(name)?.is_some();
            is_channel = registry.lookup_channel(name)?.is_some();
        }

        if let Some(config) = self.legacy_config() {
            is_queue |= config.has_queue(name);
            is_channel |= config.has_announce(name);
        }

        let mut alternatives = Vec::new();
        if group.is_some() {
            alternatives.push(format!("group:{}", name));
        }
        if is_queue {
            alternatives.push(format!("queue:{}", name));
        }
        if is_channel {
            alternatives.push(format!("channel:{}", name));
        }

        match (alternatives.len(), group) {
            (0, _) => Err(MailrouteError::UnknownAddress(name.to_string())),
            (1, Some(fields)) => Ok(self.expand_group(name, &fields, visited)),
            (1, None) if is_queue => Ok(vec![Recipient::queue(name)]),
            (1, None) => Ok(vec![Recipient::channel(name)]),
            _ => Err(MailrouteError::AmbiguousAddress {
                name: name.to_string(),
                alternatives,
            }),
        }
    }

    /// Expand a group's members, never failing.
    ///
    /// `name` is the name the group was looked up by; the stored group name
    /// may be empty. A name already in `visited` expands to nothing. Members
    /// that fail to resolve are skipped. Results are deduplicated by address,
    /// keeping the first occurrence.
    pub fn expand_group(
        &self,
        name: &str,
        fields: &GroupFields,
        visited: &mut HashSet<String>,
    ) -> Vec<Recipient> {
        if !visited.insert(name.to_string()) {
            tracing::warn!(group = %name, "Group membership cycle, skipping revisit");
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut recipients = Vec::new();

        for member in &fields.members {
            let resolved = match self.resolve_member(member, visited) {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::debug!(group = %name, member = %member, error = %e, "Skipping unresolvable group member");
                    continue;
                }
            };

            for recipient in resolved {
                if seen.insert(recipient.address.clone()) {
                    recipients.push(recipient);
                }
            }
        }

        recipients
    }

    fn resolve_member(&self, member: &str, visited: &mut HashSet<String>) -> Result<Vec<Recipient>> {
        if let Some(registry) = self.registry {
            if !member.contains('/') && !member.starts_with('@') {
                if let Ok(Some(fields)) = registry.lookup_group(member) {
                    return Ok(self.expand_group(member, &fields, visited));
                }
            }
        }
        self.resolve_visiting(member, visited)
    }

    /// Legacy messaging config, if a town root is set and the file is readable
    fn legacy_config(&self) -> Option<MessagingConfig> {
        let town_root = self.town_root?;
        match MessagingConfig::load_or_default(messaging_config_path(town_root)) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!(town_root = %town_root.display(), error = %e, "Ignoring unreadable messaging config");
                None
            }
        }
    }

    /// Members of a named list in the legacy messaging config
    pub fn expand_list(&self, name: &str) -> Result<Vec<String>> {
        let town_root = self.town_root.ok_or_else(|| {
            MailrouteError::Config("town root not set, cannot read mailing lists".to_string())
        })?;
        let config = MessagingConfig::load_or_default(messaging_config_path(town_root))?;

        match config.list(name) {
            Some(members) if !members.is_empty() => Ok(members.to_vec()),
            _ => Err(MailrouteError::ListNotFound(name.to_string())),
        }
    }

    /// Expand a built-in `@` pattern such as `@town` or `@crew/gastown`
    pub fn resolve_group_address(&self, address: &str) -> Result<Vec<String>> {
        let group = GroupAddress::parse(address)
            .ok_or_else(|| MailrouteError::InvalidGroupAddress(address.to_string()))?;
        self.expand_builtin_group(&group)
    }

    /// Addresses of the tracked agents a built-in group selects.
    ///
    /// Agents are filtered on their `role_type:` and `rig:` metadata. Town
    /// agents are the ones whose rig is `null`.
    pub fn expand_builtin_group(&self, group: &GroupAddress) -> Result<Vec<String>> {
        if group.kind == GroupKind::Overseer {
            return Ok(vec!["overseer".to_string()]);
        }

        let agents = self.registry()?.list_agents()?;
        let role = group.role_type.as_deref();
        let rig = group.rig.as_deref();

        let selects = |agent: &AgentBead| -> bool {
            let agent_role = agent.field("role_type");
            let agent_rig = agent.field("rig");
            match group.kind {
                GroupKind::Overseer => false,
                GroupKind::Town => agent_rig == Some("null"),
                GroupKind::Role => agent_role.is_some() && agent_role == role,
                GroupKind::RigRole => {
                    agent_role.is_some() && agent_role == role && agent_rig == rig
                }
                GroupKind::Rig => agent_rig.is_some() && agent_rig == rig,
            }
        };

        let mut seen = HashSet::new();
        let addresses = agents
            .values()
            .filter(|agent| selects(agent))
            .map(|agent| descriptor_to_address(Some(agent)))
            .filter(|address| !address.is_empty() && seen.insert(address.clone()))
            .collect();

        Ok(addresses)
    }

    /// Check that some tracked agent receives mail at `identity`
    pub fn validate_recipient(&self, identity: &str) -> Result<()> {
        if identity == "overseer" {
            return Ok(());
        }

        let agents = self.registry()?.list_agents()?;
        if agents
            .values()
            .any(|agent| descriptor_to_address(Some(agent)) == identity)
        {
            return Ok(());
        }

        Err(MailrouteError::RecipientNotFound(identity.to_string()))
    }

    /// Town root used for the legacy config, if any
    pub fn town_root(&self) -> Option<PathBuf> {
        self.town_root.map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnnounceConfig, QueueConfig};
    use crate::mail::RecipientType;
    use beads::{ChannelFields, MemoryRegistry, QueueFields};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn addresses(recipients: &[Recipient]) -> Vec<&str> {
        recipients.iter().map(|r| r.address.as_str()).collect()
    }

    fn agent(id: &str, description: &str) -> AgentBead {
        AgentBead::new(id).with_description(description)
    }

    fn town_registry() -> MemoryRegistry {
        MemoryRegistry::new()
            .with_agent(agent("hq-mayor", "role_type: mayor\nrig: null"))
            .with_agent(agent("hq-deacon", "role_type: deacon\nrig: null"))
            .with_agent(agent("gt-gastown-witness", "role_type: witness\nrig: gastown"))
            .with_agent(agent("gt-beads-witness", "role_type: witness\nrig: beads"))
            .with_agent(agent("gt-gastown-crew-max", "role_type: crew\nrig: gastown"))
            .with_agent(agent(
                "gt-gastown-polecat-toast",
                "role_type: polecat\nrig: gastown",
            ))
    }

    struct FailingRegistry;

    impl Registry for FailingRegistry {
        fn lookup_group(&self, _name: &str) -> beads::Result<Option<GroupFields>> {
            Err(beads::Error::NotInRepo)
        }

        fn lookup_queue(&self, _name: &str) -> beads::Result<Option<QueueFields>> {
            Err(beads::Error::NotInRepo)
        }

        fn lookup_channel(&self, _name: &str) -> beads::Result<Option<ChannelFields>> {
            Err(beads::Error::NotInRepo)
        }

        fn list_agents(&self) -> beads::Result<BTreeMap<String, AgentBead>> {
            Err(beads::Error::NotInRepo)
        }
    }

    fn write_legacy_config(dir: &TempDir) {
        let mut config = MessagingConfig::new();
        config.lists.insert(
            "oncall".to_string(),
            vec!["mayor/".to_string(), "gastown/witness".to_string()],
        );
        config.queues.insert(
            "work".to_string(),
            QueueConfig {
                workers: vec!["gastown/polecats/*".to_string()],
                max_claims: 0,
            },
        );
        config.announces.insert(
            "alerts".to_string(),
            AnnounceConfig {
                readers: vec!["@town".to_string()],
                retain_count: 10,
            },
        );
        config.save(messaging_config_path(dir.path())).unwrap();
    }

    #[test]
    fn test_explicit_queue_and_channel() {
        let resolver = Resolver::new();

        let queue = resolver.resolve("queue:work").unwrap();
        assert_eq!(queue, vec![Recipient::queue("work")]);
        assert_eq!(queue[0].address, "queue:work");
        assert_eq!(queue[0].recipient_type, RecipientType::Queue);
        assert_eq!(queue[0].original_name.as_deref(), Some("work"));

        let channel = resolver.resolve("channel:alerts").unwrap();
        assert_eq!(channel[0].address, "channel:alerts");
        assert_eq!(channel[0].recipient_type, RecipientType::Channel);
    }

    #[test]
    fn test_direct_agent_without_registry() {
        let recipients = Resolver::new().resolve("gastown/crew/max").unwrap();
        assert_eq!(recipients, vec![Recipient::agent("gastown/crew/max")]);
    }

    #[test]
    fn test_legacy_prefixes_pass_through() {
        let resolver = Resolver::new();
        for address in ["list:oncall", "announce:alerts"] {
            let recipients = resolver.resolve(address).unwrap();
            assert_eq!(recipients, vec![Recipient::agent(address)]);
        }
    }

    #[test]
    fn test_pattern_requires_registry() {
        let err = Resolver::new().resolve("*/witness").unwrap_err();
        assert!(matches!(err, MailrouteError::RegistryUnavailable));
    }

    #[test]
    fn test_pattern_expansion() {
        let registry = town_registry();
        let resolver = Resolver::new().with_registry(&registry);

        let witnesses = resolver.resolve("*/witness").unwrap();
        assert_eq!(addresses(&witnesses), vec!["beads/witness", "gastown/witness"]);

        let crew = resolver.resolve("gastown/crew/*").unwrap();
        assert_eq!(addresses(&crew), vec!["gastown/crew/max"]);

        let err = resolver.resolve("*/nobody").unwrap_err();
        assert!(matches!(err, MailrouteError::NoPatternMatch(ref p) if p == "*/nobody"));
    }

    #[test]
    fn test_at_native_group_or_pass_through() {
        let registry = MemoryRegistry::new().with_group("ops", ["mayor/", "deacon/"]);
        let resolver = Resolver::new().with_registry(&registry);

        let ops = resolver.resolve("@ops").unwrap();
        assert_eq!(addresses(&ops), vec!["mayor/", "deacon/"]);

        let town = resolver.resolve("@town").unwrap();
        assert_eq!(town, vec![Recipient::agent("@town")]);

        let unregistered = Resolver::new().resolve("@ops").unwrap();
        assert_eq!(unregistered, vec![Recipient::agent("@ops")]);
    }

    #[test]
    fn test_explicit_group() {
        let registry = MemoryRegistry::new().with_group("ops", ["mayor/"]);
        let resolver = Resolver::new().with_registry(&registry);

        assert_eq!(addresses(&resolver.resolve("group:ops").unwrap()), vec!["mayor/"]);

        let err = resolver.resolve("group:missing").unwrap_err();
        assert!(matches!(err, MailrouteError::GroupNotFound(ref n) if n == "missing"));

        let err = Resolver::new().resolve("group:ops").unwrap_err();
        assert!(matches!(err, MailrouteError::RegistryUnavailable));
    }

    #[test]
    fn test_bare_name_single_namespace() {
        let registry = MemoryRegistry::new()
            .with_group("ops", ["mayor/"])
            .with_queue("work")
            .with_channel("alerts");
        let resolver = Resolver::new().with_registry(&registry);

        assert_eq!(addresses(&resolver.resolve("ops").unwrap()), vec!["mayor/"]);
        assert_eq!(resolver.resolve("work").unwrap(), vec![Recipient::queue("work")]);
        assert_eq!(
            resolver.resolve("alerts").unwrap(),
            vec![Recipient::channel("alerts")]
        );
    }

    #[test]
    fn test_bare_name_unknown() {
        let registry = MemoryRegistry::new();
        let err = Resolver::new()
            .with_registry(&registry)
            .resolve("nobody")
            .unwrap_err();
        assert!(matches!(err, MailrouteError::UnknownAddress(ref n) if n == "nobody"));

        let err = Resolver::new().resolve("nobody").unwrap_err();
        assert!(matches!(err, MailrouteError::UnknownAddress(_)));
    }

    #[test]
    fn test_bare_name_ambiguous() {
        let registry = MemoryRegistry::new()
            .with_group("ops", ["mayor/"])
            .with_queue("ops")
            .with_channel("ops");
        let err = Resolver::new()
            .with_registry(&registry)
            .resolve("ops")
            .unwrap_err();

        assert!(err.is_ambiguous());
        assert_eq!(err.alternatives(), ["group:ops", "queue:ops", "channel:ops"]);
    }

    #[test]
    fn test_bare_name_uses_legacy_config() {
        let dir = TempDir::new().unwrap();
        write_legacy_config(&dir);
        let resolver = Resolver::new().with_town_root(dir.path());

        assert_eq!(resolver.resolve("work").unwrap(), vec![Recipient::queue("work")]);
        assert_eq!(
            resolver.resolve("alerts").unwrap(),
            vec![Recipient::channel("alerts")]
        );
        assert!(resolver.resolve("oncall").is_err());
    }

    #[test]
    fn test_legacy_and_native_conflict() {
        let dir = TempDir::new().unwrap();
        write_legacy_config(&dir);
        let registry = MemoryRegistry::new().with_group("work", ["mayor/"]);
        let resolver = Resolver::new()
            .with_registry(&registry)
            .with_town_root(dir.path());

        let err = resolver.resolve("work").unwrap_err();
        assert_eq!(err.alternatives(), ["group:work", "queue:work"]);
    }

    #[test]
    fn test_unreadable_legacy_config_ignored() {
        let dir = TempDir::new().unwrap();
        let path = messaging_config_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let registry = MemoryRegistry::new().with_queue("work");
        let resolver = Resolver::new()
            .with_registry(&registry)
            .with_town_root(dir.path());
        assert_eq!(resolver.resolve("work").unwrap(), vec![Recipient::queue("work")]);
    }

    #[test]
    fn test_registry_errors_propagate() {
        let resolver = Resolver::new().with_registry(&FailingRegistry);
        assert!(matches!(
            resolver.resolve("ops").unwrap_err(),
            MailrouteError::Registry(_)
        ));
        assert!(matches!(
            resolver.resolve("@ops").unwrap_err(),
            MailrouteError::Registry(_)
        ));
    }

    #[test]
    fn test_self_referencing_group() {
        let registry = MemoryRegistry::new().with_group("loop", ["loop", "mayor/"]);
        let resolver = Resolver::new().with_registry(&registry);
        assert_eq!(addresses(&resolver.resolve("loop").unwrap()), vec!["mayor/"]);
    }

    #[test]
    fn test_unnamed_group_referencing_itself() {
        let registry = MemoryRegistry::new().with_group("", ["@", "", "mayor/"]);
        let resolver = Resolver::new().with_registry(&registry);
        assert_eq!(addresses(&resolver.resolve("@").unwrap()), vec!["mayor/"]);
    }

    #[test]
    fn test_group_with_empty_stored_name() {
        let registry = MemoryRegistry::new().with_group("ops", ["ops", "mayor/"]);
        let resolver = Resolver::new().with_registry(&registry);
        let fields = GroupFields::new(
            "",
            vec!["group:ops".to_string(), "deacon/".to_string(), "mayor/".to_string()],
        );

        let recipients = resolver.expand_group("ops", &fields, &mut HashSet::new());
        assert_eq!(addresses(&recipients), vec!["deacon/", "mayor/"]);
    }

    #[test]
    fn test_mutually_referencing_groups() {
        let registry = MemoryRegistry::new()
            .with_group("a", ["b", "mayor/"])
            .with_group("b", ["a", "deacon/"]);
        let resolver = Resolver::new().with_registry(&registry);

        assert_eq!(
            addresses(&resolver.resolve("group:a").unwrap()),
            vec!["deacon/", "mayor/"]
        );
        assert_eq!(
            addresses(&resolver.resolve("b").unwrap()),
            vec!["mayor/", "deacon/"]
        );
    }

    #[test]
    fn test_cycle_through_prefixed_members() {
        let registry = MemoryRegistry::new()
            .with_group("a", ["group:b", "mayor/"])
            .with_group("b", ["@a", "deacon/"]);
        let resolver = Resolver::new().with_registry(&registry);

        assert_eq!(
            addresses(&resolver.resolve("@a").unwrap()),
            vec!["deacon/", "mayor/"]
        );
    }

    #[test]
    fn test_bad_members_are_isolated() {
        let registry = town_registry().with_group(
            "mixed",
            [
                "mayor/",
                "nonexistent",
                "*/nobody",
                "group:missing",
                "gastown/witness",
                "mayor/",
            ],
        );
        let resolver = Resolver::new().with_registry(&registry);

        let recipients = resolver.resolve("mixed").unwrap();
        assert_eq!(addresses(&recipients), vec!["mayor/", "gastown/witness"]);
    }

    #[test]
    fn test_group_members_of_every_kind() {
        let registry = town_registry()
            .with_group("inner", ["deacon/", "mayor/"])
            .with_group(
                "outer",
                ["*/witness", "queue:work", "channel:alerts", "@town", "inner"],
            );
        let resolver = Resolver::new().with_registry(&registry);

        let recipients = resolver.resolve("outer").unwrap();
        assert_eq!(
            addresses(&recipients),
            vec![
                "beads/witness",
                "gastown/witness",
                "queue:work",
                "channel:alerts",
                "@town",
                "deacon/",
                "mayor/",
            ]
        );
        assert_eq!(recipients[2].recipient_type, RecipientType::Queue);
    }

    #[test]
    fn test_expand_group_visited_is_per_call() {
        let registry = MemoryRegistry::new().with_group("ops", ["mayor/"]);
        let resolver = Resolver::new().with_registry(&registry);

        assert_eq!(resolver.resolve("ops").unwrap().len(), 1);
        assert_eq!(resolver.resolve("ops").unwrap().len(), 1);
    }

    #[test]
    fn test_expand_builtin_groups() {
        let registry = town_registry();
        let resolver = Resolver::new().with_registry(&registry);

        let cases = vec![
            ("@town", vec!["deacon/", "mayor/"]),
            ("@witnesses", vec!["beads/witness", "gastown/witness"]),
            ("@crew/gastown", vec!["gastown/max"]),
            ("@polecats/gastown", vec!["gastown/toast"]),
            ("@rig/gastown", vec!["gastown/max", "gastown/toast", "gastown/witness"]),
            ("@rig/nowhere", vec![]),
            ("@dogs", vec![]),
        ];

        for (address, want) in cases {
            let got = resolver.resolve_group_address(address).unwrap();
            assert_eq!(got, want, "resolve_group_address({:?})", address);
        }
    }

    #[test]
    fn test_builtin_overseer_and_invalid() {
        let resolver = Resolver::new();
        assert_eq!(
            resolver.resolve_group_address("@overseer").unwrap(),
            vec!["overseer"]
        );

        let err = resolver.resolve_group_address("@bogus").unwrap_err();
        assert!(matches!(err, MailrouteError::InvalidGroupAddress(_)));

        let err = resolver.resolve_group_address("@town").unwrap_err();
        assert!(matches!(err, MailrouteError::RegistryUnavailable));
    }

    #[test]
    fn test_expand_list() {
        let dir = TempDir::new().unwrap();
        write_legacy_config(&dir);
        let resolver = Resolver::new().with_town_root(dir.path());

        assert_eq!(
            resolver.expand_list("oncall").unwrap(),
            vec!["mayor/", "gastown/witness"]
        );
        assert!(matches!(
            resolver.expand_list("missing").unwrap_err(),
            MailrouteError::ListNotFound(_)
        ));
        assert!(matches!(
            Resolver::new().expand_list("oncall").unwrap_err(),
            MailrouteError::Config(_)
        ));
    }

    #[test]
    fn test_validate_recipient() {
        let registry = town_registry();
        let resolver = Resolver::new().with_registry(&registry);

        assert!(resolver.validate_recipient("overseer").is_ok());
        assert!(resolver.validate_recipient("mayor/").is_ok());
        assert!(resolver.validate_recipient("gastown/max").is_ok());
        assert!(resolver.validate_recipient("gastown/witness").is_ok());
        assert!(matches!(
            resolver.validate_recipient("gastown/crew/max").unwrap_err(),
            MailrouteError::RecipientNotFound(_)
        ));

        assert!(Resolver::new().validate_recipient("overseer").is_ok());
        assert!(matches!(
            Resolver::new().validate_recipient("mayor/").unwrap_err(),
            MailrouteError::RegistryUnavailable
        ));
    }
}
