//! In-memory proxy backend used by the `mock` frontend build and by tests.
//!
//! Mirrors the server's behaviour closely enough for the screens: ids and
//! timestamps are server-assigned, missing records answer 404, and
//! duplicate names are rejected with a backend-style message.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    access_group::{AccessGroupCreateParams, AccessGroupResponse, AccessGroupUpdateParams},
    agent::{
        Agent, AgentCreateRequest, AgentFormValues, AgentPatchRequest, AgentTemplate, AgentTypeInfo,
        CredentialField, KeySummary,
    },
    error::ApiError,
    plugin::{plugin_from_request, Plugin, PluginCreateRequest, PluginSource},
    resource::{AssociationSet, AuditInfo},
};

const MOCK_USER: &str = "admin";

fn not_found(what: &str, id: &str) -> ApiError {
    ApiError::Http {
        status: 404,
        message: Some(format!("{what} {id} not found")),
    }
}

fn conflict(message: String) -> ApiError {
    ApiError::Http {
        status: 400,
        message: Some(message),
    }
}

/// Rows of one collection plus the id counter.
#[derive(Debug, Clone)]
pub struct MemoryTable<T> {
    prefix: &'static str,
    next_id: u64,
    rows: Vec<T>,
}

impl<T: Clone> MemoryTable<T> {
    /// Empty table handing out ids `{prefix}_1`, `{prefix}_2`, ...
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next_id: 1,
            rows: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> String {
        let id = format!("{}_{}", self.prefix, self.next_id);
        self.next_id += 1;
        id
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.iter().find(|row| pred(row))
    }

    fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| pred(row))
    }

    fn remove(&mut self, pred: impl Fn(&T) -> bool) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| !pred(row));
        self.rows.len() != before
    }
}

/// The whole fake proxy.
#[derive(Debug, Clone)]
pub struct MockBackend {
    clock: DateTime<Utc>,
    access_groups: MemoryTable<AccessGroupResponse>,
    agents: MemoryTable<Agent>,
    plugins: MemoryTable<Plugin>,
    keys: MemoryTable<KeySummary>,
    models: Vec<String>,
    mcp_servers: Vec<String>,
    agent_types: Vec<AgentTypeInfo>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::empty(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).single().unwrap_or_default())
    }
}

impl MockBackend {
    /// No records at all; the clock starts at `start`.
    pub fn empty(start: DateTime<Utc>) -> Self {
        Self {
            clock: start,
            access_groups: MemoryTable::new("ag"),
            agents: MemoryTable::new("agent"),
            plugins: MemoryTable::new("plugin"),
            keys: MemoryTable::new("key"),
            models: Vec::new(),
            mcp_servers: Vec::new(),
            agent_types: Vec::new(),
        }
    }

    /// Demo data: `ag_1` carries one model and twelve keys, plus a handful
    /// of agents, plugins and keys to pick from.
    pub fn seeded() -> Self {
        let mut backend = Self::default();
        backend.models = ["gpt-4o", "gpt-4o-mini", "claude-3-5-sonnet", "text-embedding-3-small"]
            .into_iter()
            .map(str::to_string)
            .collect();
        backend.mcp_servers = vec!["github-mcp".to_string(), "jira-mcp".to_string()];
        backend.agent_types = vec![AgentTypeInfo {
            agent_type: "bedrock_agentcore".to_string(),
            display_name: Some("Bedrock AgentCore".to_string()),
            description: Some("Agents hosted on AWS Bedrock AgentCore".to_string()),
            use_a2a_form_fields: false,
            litellm_params_template: serde_json::json!({"custom_llm_provider": "bedrock_agentcore"})
                .as_object()
                .cloned(),
            credential_fields: vec![
                CredentialField {
                    key: "agent_runtime_arn".to_string(),
                    label: "Agent Runtime ARN".to_string(),
                    required: true,
                    include_in_litellm_params: None,
                    secret: false,
                },
                CredentialField {
                    key: "aws_secret_access_key".to_string(),
                    label: "AWS Secret Access Key".to_string(),
                    required: false,
                    include_in_litellm_params: None,
                    secret: true,
                },
            ],
        }];

        for alias in ["prod-backend", "staging", "ci-runner"] {
            let _ = backend.generate_key(Some(alias.to_string()), Vec::new());
        }
        let key_ids: Vec<String> = (1..=12).map(|n| format!("sk-seeded-key-{n:04}-abcdefghijkl")).collect();

        if let Ok(group) = backend.create_access_group(AccessGroupCreateParams {
            access_group_name: "Engineering".to_string(),
            description: Some("Models available to the platform team".to_string()),
            access_model_names: vec!["gpt-4o".to_string()],
            access_mcp_server_ids: Vec::new(),
            access_agent_ids: Vec::new(),
        }) {
            if let Some(row) = backend
                .access_groups
                .find_mut(|row| row.access_group_id == group.access_group_id)
            {
                row.assigned_key_ids = key_ids.into();
                row.assigned_team_ids = AssociationSet::from_iter(["team-platform"]);
            }
        }
        let _ = backend.create_access_group(AccessGroupCreateParams {
            access_group_name: "Sales".to_string(),
            description: None,
            access_model_names: vec!["gpt-4o-mini".to_string(), "claude-3-5-sonnet".to_string()],
            access_mcp_server_ids: vec!["jira-mcp".to_string()],
            access_agent_ids: Vec::new(),
        });

        let support_bot = AgentFormValues {
            agent_name: "support-bot".to_string(),
            description: "Answers support tickets".to_string(),
            url: "https://agents.example.com/support".to_string(),
            streaming: true,
            ..AgentFormValues::default()
        };
        if let Ok(request) = AgentTemplate::A2a.build(&support_bot) {
            let _ = backend.create_agent(request);
        }

        let _ = backend.create_plugin(PluginCreateRequest {
            name: "code-review".to_string(),
            source: PluginSource::Github {
                repo: "anthropics/claude-code".to_string(),
            },
            version: Some("1.2.0".to_string()),
            description: Some("Review pull requests".to_string()),
            author: None,
            homepage: None,
            category: Some("Development".to_string()),
            keywords: Some(vec!["git".to_string(), "review".to_string()]),
        });
        backend
    }

    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += Duration::minutes(1);
        self.clock
    }

    // Access groups.

    /// Every group in insertion order.
    pub fn list_access_groups(&self) -> Vec<AccessGroupResponse> {
        self.access_groups.rows().to_vec()
    }

    /// `None` for unknown ids, as the proxy answers 404.
    pub fn get_access_group(&self, id: &str) -> Option<AccessGroupResponse> {
        self.access_groups.find(|row| row.access_group_id == id).cloned()
    }

    fn ensure_unique_group_name(&self, name: &str, except: Option<&str>) -> Result<(), ApiError> {
        let taken = self
            .access_groups
            .find(|row| row.access_group_name == name && Some(row.access_group_id.as_str()) != except)
            .is_some();
        if taken {
            Err(conflict(format!("Access group '{name}' already exists")))
        } else {
            Ok(())
        }
    }

    /// Fails with 400 when the name is taken.
    pub fn create_access_group(
        &mut self,
        params: AccessGroupCreateParams,
    ) -> Result<AccessGroupResponse, ApiError> {
        self.ensure_unique_group_name(&params.access_group_name, None)?;
        let at = self.tick();
        let audit = AuditInfo::created(at, Some(MOCK_USER.to_string()));
        let row = AccessGroupResponse {
            access_group_id: self.access_groups.allocate_id(),
            access_group_name: params.access_group_name,
            description: params.description,
            access_model_names: params.access_model_names.into(),
            access_mcp_server_ids: params.access_mcp_server_ids.into(),
            access_agent_ids: params.access_agent_ids.into(),
            assigned_key_ids: AssociationSet::default(),
            assigned_team_ids: AssociationSet::default(),
            created_at: audit.created_at,
            created_by: audit.created_by,
            updated_at: audit.updated_at,
            updated_by: audit.updated_by,
        };
        self.access_groups.rows.push(row.clone());
        Ok(row)
    }

    /// Fails with 404 for unknown ids and 400 for a name clash.
    pub fn update_access_group(
        &mut self,
        id: &str,
        params: AccessGroupUpdateParams,
    ) -> Result<AccessGroupResponse, ApiError> {
        self.ensure_unique_group_name(&params.access_group_name, Some(id))?;
        let at = self.tick();
        let row = self
            .access_groups
            .find_mut(|row| row.access_group_id == id)
            .ok_or_else(|| not_found("Access group", id))?;
        row.access_group_name = params.access_group_name;
        row.description = params.description;
        row.access_model_names = params.access_model_names.into();
        row.access_mcp_server_ids = params.access_mcp_server_ids.into();
        row.access_agent_ids = params.access_agent_ids.into();
        row.updated_at = at;
        row.updated_by = Some(MOCK_USER.to_string());
        Ok(row.clone())
    }

    /// Fails with 404 for unknown ids.
    pub fn delete_access_group(&mut self, id: &str) -> Result<(), ApiError> {
        if self.access_groups.remove(|row| row.access_group_id == id) {
            Ok(())
        } else {
            Err(not_found("Access group", id))
        }
    }

    // Agents.

    /// Every agent in insertion order.
    pub fn list_agents(&self) -> Vec<Agent> {
        self.agents.rows().to_vec()
    }

    /// `None` for unknown ids.
    pub fn get_agent(&self, id: &str) -> Option<Agent> {
        self.agents.find(|row| row.agent_id == id).cloned()
    }

    /// Provider types offered by the wizard.
    pub fn agent_types(&self) -> Vec<AgentTypeInfo> {
        self.agent_types.clone()
    }

    /// Store a new agent; names must be unique.
    pub fn create_agent(&mut self, request: AgentCreateRequest) -> Result<Agent, ApiError> {
        if self.agents.find(|row| row.agent_name == request.agent_name).is_some() {
            return Err(conflict(format!("Agent '{}' already exists", request.agent_name)));
        }
        let at = self.tick();
        let agent = Agent {
            agent_id: self.agents.allocate_id(),
            agent_name: request.agent_name,
            agent_card_params: Some(request.agent_card_params),
            litellm_params: request.litellm_params.unwrap_or_default(),
            audit: AuditInfo::created(at, Some(MOCK_USER.to_string())),
        };
        self.agents.rows.push(agent.clone());
        Ok(agent)
    }

    /// Apply an edit; 404 for unknown ids.
    pub fn patch_agent(&mut self, id: &str, patch: AgentPatchRequest) -> Result<Agent, ApiError> {
        let at = self.tick();
        let agent = self
            .agents
            .find_mut(|row| row.agent_id == id)
            .ok_or_else(|| not_found("Agent", id))?;
        agent.agent_name = patch.agent_name;
        agent.agent_card_params = Some(patch.agent_card_params);
        agent.audit.touch(at, Some(MOCK_USER.to_string()));
        Ok(agent.clone())
    }

    /// Fails with 404 for unknown ids.
    pub fn delete_agent(&mut self, id: &str) -> Result<(), ApiError> {
        if self.agents.remove(|row| row.agent_id == id) {
            Ok(())
        } else {
            Err(not_found("Agent", id))
        }
    }

    // Keys.

    /// Keys whose alias contains `alias`, ignoring case.
    pub fn search_keys(&self, alias: &str) -> Vec<KeySummary> {
        let needle = alias.trim().to_lowercase();
        self.keys
            .rows()
            .iter()
            .filter(|key| {
                needle.is_empty()
                    || key
                        .key_alias
                        .as_deref()
                        .map(|a| a.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Mint a key and return it.
    pub fn generate_key(
        &mut self,
        key_alias: Option<String>,
        _models: Vec<String>,
    ) -> Result<KeySummary, ApiError> {
        let serial = self.keys.allocate_id();
        let key = KeySummary {
            token: format!("sk-mock-{serial}-{:08x}", self.keys.rows.len() * 7919 + 17),
            key_alias,
            key_name: Some(format!("sk-...{serial}")),
        };
        self.keys.rows.push(key.clone());
        Ok(key)
    }

    /// Attach an existing key to an agent.
    pub fn assign_key_to_agent(&mut self, token: &str, agent_id: &str) -> Result<KeySummary, ApiError> {
        if self.get_agent(agent_id).is_none() {
            return Err(not_found("Agent", agent_id));
        }
        self.keys
            .find(|key| key.token == token)
            .cloned()
            .ok_or_else(|| not_found("Key", token))
    }

    /// Model names for the association editors.
    pub fn models(&self) -> Vec<String> {
        self.models.clone()
    }

    /// MCP server ids for the association editors.
    pub fn mcp_servers(&self) -> Vec<String> {
        self.mcp_servers.clone()
    }

    // Plugins.

    /// Every plugin in insertion order.
    pub fn list_plugins(&self) -> Vec<Plugin> {
        self.plugins.rows().to_vec()
    }

    /// Fails with 400 when the name is taken.
    pub fn create_plugin(&mut self, request: PluginCreateRequest) -> Result<Plugin, ApiError> {
        if self.plugins.find(|row| row.name == request.name).is_some() {
            return Err(conflict(format!("Plugin '{}' already exists", request.name)));
        }
        let at = self.tick();
        let id = self.plugins.allocate_id();
        let plugin = plugin_from_request(id, request, at, Some(MOCK_USER.to_string()));
        self.plugins.rows.push(plugin.clone());
        Ok(plugin)
    }

    /// Plugins are addressed by name.
    pub fn set_plugin_enabled(&mut self, name: &str, enabled: bool) -> Result<Plugin, ApiError> {
        let at = self.tick();
        let plugin = self
            .plugins
            .find_mut(|row| row.name == name)
            .ok_or_else(|| not_found("Plugin", name))?;
        plugin.enabled = enabled;
        plugin.audit.touch(at, Some(MOCK_USER.to_string()));
        Ok(plugin.clone())
    }

    /// Fails with 404 for unknown names.
    pub fn delete_plugin(&mut self, name: &str) -> Result<(), ApiError> {
        if self.plugins.remove(|row| row.name == name) {
            Ok(())
        } else {
            Err(not_found("Plugin", name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access_group::AccessGroup,
        list_view::{apply, ListQuery},
        screen::{Effect, ModalState, ResourceScreen},
    };

    fn params(name: &str) -> AccessGroupCreateParams {
        AccessGroupCreateParams {
            access_group_name: name.to_string(),
            description: None,
            access_model_names: Vec::new(),
            access_mcp_server_ids: Vec::new(),
            access_agent_ids: Vec::new(),
        }
    }

    fn groups(backend: &MockBackend) -> Vec<AccessGroup> {
        backend.list_access_groups().into_iter().map(AccessGroup::from).collect()
    }

    #[test]
    fn created_group_shows_up_in_list() {
        let mut backend = MockBackend::seeded();
        let created = backend.create_access_group(params("Research")).map(AccessGroup::from);
        let created = created.unwrap_or_else(|err| panic!("create failed: {err}"));
        assert!(created.id.starts_with("ag_"));

        let page = apply(&groups(&backend), &ListQuery::default().with_search("research"));
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].id, created.id);
        assert_eq!(page.rows[0].name, "Research");
    }

    #[test]
    fn duplicate_name_is_rejected_with_backend_message() {
        let mut backend = MockBackend::seeded();
        let err = backend.create_access_group(params("Engineering")).err();
        assert_eq!(
            err.map(|e| e.user_message("fallback")).as_deref(),
            Some("Access group 'Engineering' already exists")
        );
    }

    #[test]
    fn delete_only_after_confirm() {
        let mut backend = MockBackend::seeded();
        let before = backend.list_access_groups().len();
        let mut screen = ResourceScreen::default();

        screen.request_delete("ag_2");
        screen.cancel();
        assert_eq!(screen.modal(), &ModalState::Closed);
        assert_eq!(screen.confirm_delete(), None);
        assert_eq!(backend.list_access_groups().len(), before);

        screen.request_delete("ag_2");
        if let Some(Effect::Delete(id)) = screen.confirm_delete() {
            screen.submit_started();
            assert!(backend.delete_access_group(&id).is_ok());
            screen.mutation_succeeded("deleted");
        }
        assert_eq!(backend.list_access_groups().len(), before - 1);
        assert!(backend.get_access_group("ag_2").is_none());
    }

    #[test]
    fn seeded_group_has_one_model_and_no_mcp_servers() {
        let backend = MockBackend::seeded();
        let group = backend.get_access_group("ag_1").map(AccessGroup::from);
        let group = group.unwrap_or_else(|| panic!("ag_1 missing"));
        assert_eq!(group.model_ids.len(), 1);
        assert_eq!(group.model_ids.as_slice(), ["gpt-4o"]);
        assert!(group.mcp_server_ids.is_empty());
        assert_eq!(group.key_ids.len(), 12);
    }

    #[test]
    fn update_bumps_audit_and_missing_ids_are_404() {
        let mut backend = MockBackend::seeded();
        let before = backend.get_access_group("ag_1").map(|g| g.updated_at);
        let updated = backend.update_access_group("ag_1", params("Engineering")).ok();
        assert!(updated.map(|g| g.updated_at) > before);
        assert!(backend.delete_access_group("ag_404").err().is_some_and(|e| e.is_not_found()));
    }

    #[test]
    fn key_search_matches_alias() {
        let backend = MockBackend::seeded();
        let keys = backend.search_keys("STAG");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].key_alias.as_deref(), Some("staging"));
        assert_eq!(backend.search_keys("").len(), 3);
    }
}
