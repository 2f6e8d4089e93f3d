//! Access groups: bundles of models, MCP servers and agents that keys and
//! teams can be attached to.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::FieldErrors,
    resource::{AssociationSet, AuditInfo, Resource},
    validation,
};

/// Access group as the proxy returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGroupResponse {
    /// Server-assigned id.
    pub access_group_id: String,
    /// Display name.
    pub access_group_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Model names the group grants.
    #[serde(default)]
    pub access_model_names: AssociationSet,
    /// MCP server ids the group grants.
    #[serde(default)]
    pub access_mcp_server_ids: AssociationSet,
    /// Agent ids the group grants.
    #[serde(default)]
    pub access_agent_ids: AssociationSet,
    /// Keys attached to the group.
    #[serde(default)]
    pub assigned_key_ids: AssociationSet,
    /// Teams attached to the group.
    #[serde(default)]
    pub assigned_team_ids: AssociationSet,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Creator, when the proxy records one.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Last editor, when the proxy records one.
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Access group as the screens use it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessGroup {
    /// Server-assigned id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Blank descriptions are stored as `None`.
    pub description: Option<String>,
    /// Models granted.
    pub model_ids: AssociationSet,
    /// MCP servers granted.
    pub mcp_server_ids: AssociationSet,
    /// Agents granted.
    pub agent_ids: AssociationSet,
    /// Attached keys.
    pub key_ids: AssociationSet,
    /// Attached teams.
    pub team_ids: AssociationSet,
    /// Creation and update stamps.
    pub audit: AuditInfo,
}

impl From<AccessGroupResponse> for AccessGroup {
    fn from(r: AccessGroupResponse) -> Self {
        AccessGroup {
            id: r.access_group_id,
            name: r.access_group_name,
            description: r.description.filter(|text| !text.trim().is_empty()),
            model_ids: r.access_model_names,
            mcp_server_ids: r.access_mcp_server_ids,
            agent_ids: r.access_agent_ids,
            key_ids: r.assigned_key_ids,
            team_ids: r.assigned_team_ids,
            audit: AuditInfo {
                created_at: r.created_at,
                created_by: r.created_by.filter(|by| !by.is_empty()),
                updated_at: r.updated_at,
                updated_by: r.updated_by.filter(|by| !by.is_empty()),
            },
        }
    }
}

impl From<AccessGroup> for AccessGroupResponse {
    fn from(g: AccessGroup) -> Self {
        AccessGroupResponse {
            access_group_id: g.id,
            access_group_name: g.name,
            description: g.description,
            access_model_names: g.model_ids,
            access_mcp_server_ids: g.mcp_server_ids,
            access_agent_ids: g.agent_ids,
            assigned_key_ids: g.key_ids,
            assigned_team_ids: g.team_ids,
            created_at: g.audit.created_at,
            created_by: g.audit.created_by,
            updated_at: g.audit.updated_at,
            updated_by: g.audit.updated_by,
        }
    }
}

/// Sortable access group columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGroupSort {
    /// By name, ignoring case.
    Name,
    /// By creation time.
    CreatedAt,
}

impl Resource for AccessGroup {
    type SortKey = AccessGroupSort;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    fn compare(&self, other: &Self, key: AccessGroupSort) -> Ordering {
        match key {
            AccessGroupSort::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            AccessGroupSort::CreatedAt => self.audit.created_at.cmp(&other.audit.created_at),
        }
    }
}

/// Body of `POST /v1/access_group`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGroupCreateParams {
    /// Group name.
    pub access_group_name: String,
    /// Omitted by the proxy when blank.
    pub description: Option<String>,
    /// Models to grant.
    pub access_model_names: Vec<String>,
    /// MCP servers to grant.
    pub access_mcp_server_ids: Vec<String>,
    /// Agents to grant.
    pub access_agent_ids: Vec<String>,
}

/// Body of `PUT /v1/access_group/{id}`. Same shape as create; the id
/// travels in the path and is never part of the body.
pub type AccessGroupUpdateParams = AccessGroupCreateParams;

/// Form tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGroupTab {
    /// Name and description.
    General,
    /// Model associations.
    Models,
    /// MCP server associations.
    McpServers,
    /// Agent associations.
    Agents,
}

impl AccessGroupTab {
    /// Every tab, in display order.
    pub const ALL: [AccessGroupTab; 4] = [
        AccessGroupTab::General,
        AccessGroupTab::Models,
        AccessGroupTab::McpServers,
        AccessGroupTab::Agents,
    ];
}

/// Draft values of the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessGroupFormValues {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Selected model names.
    pub model_ids: Vec<String>,
    /// Selected MCP server ids.
    pub mcp_server_ids: Vec<String>,
    /// Selected agent ids.
    pub agent_ids: Vec<String>,
}

impl AccessGroupFormValues {
    /// Prefill from a stored group.
    pub fn from_group(group: &AccessGroup) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone().unwrap_or_default(),
            model_ids: group.model_ids.to_vec(),
            mcp_server_ids: group.mcp_server_ids.to_vec(),
            agent_ids: group.agent_ids.to_vec(),
        }
    }

    /// Validate and map to the request body.
    pub fn to_params(&self) -> Result<AccessGroupCreateParams, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", validation::required("Group name", &self.name));

        let description = self.description.trim();
        errors.into_result(AccessGroupCreateParams {
            access_group_name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            access_model_names: dedup(&self.model_ids),
            access_mcp_server_ids: dedup(&self.mcp_server_ids),
            access_agent_ids: dedup(&self.agent_ids),
        })
    }
}

fn dedup(ids: &[String]) -> Vec<String> {
    ids.iter().cloned().collect::<AssociationSet>().to_vec()
}

/// Create/edit form shared by both modals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGroupForm {
    values: AccessGroupFormValues,
    initial: AccessGroupFormValues,
    errors: FieldErrors,
    is_name_disabled: bool,
    active_tab: AccessGroupTab,
}

impl AccessGroupForm {
    /// Blank form for the create modal.
    pub fn create() -> Self {
        Self::with_values(AccessGroupFormValues::default(), false)
    }

    /// Form prefilled from `group` for the edit modal.
    pub fn edit(group: &AccessGroup, is_name_disabled: bool) -> Self {
        Self::with_values(AccessGroupFormValues::from_group(group), is_name_disabled)
    }

    fn with_values(values: AccessGroupFormValues, is_name_disabled: bool) -> Self {
        Self {
            initial: values.clone(),
            values,
            errors: FieldErrors::new(),
            is_name_disabled,
            active_tab: AccessGroupTab::General,
        }
    }

    /// Current draft.
    pub fn values(&self) -> &AccessGroupFormValues {
        &self.values
    }

    /// Errors from the last submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// `true` when the name field is locked.
    pub fn is_name_disabled(&self) -> bool {
        self.is_name_disabled
    }

    /// Tab currently shown.
    pub fn active_tab(&self) -> AccessGroupTab {
        self.active_tab
    }

    /// Show `tab`.
    pub fn set_tab(&mut self, tab: AccessGroupTab) {
        self.active_tab = tab;
    }

    /// `true` once any field differs from the prefilled values.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Update the name unless it is locked. Clears its error.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.is_name_disabled {
            return;
        }
        self.values.name = name.into();
        self.errors = FieldErrors::new();
    }

    /// Update the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
    }

    /// Replace the selected models.
    pub fn set_model_ids(&mut self, ids: Vec<String>) {
        self.values.model_ids = ids;
    }

    /// Replace the selected MCP servers.
    pub fn set_mcp_server_ids(&mut self, ids: Vec<String>) {
        self.values.mcp_server_ids = ids;
    }

    /// Replace the selected agents.
    pub fn set_agent_ids(&mut self, ids: Vec<String>) {
        self.values.agent_ids = ids;
    }

    /// Validate. On failure the errors are kept for display and the form
    /// jumps to the General tab, where the only required field lives.
    pub fn submit(&mut self) -> Result<AccessGroupCreateParams, FieldErrors> {
        match self.values.to_params() {
            Ok(params) => {
                self.errors = FieldErrors::new();
                Ok(params)
            },
            Err(errors) => {
                self.errors = errors.clone();
                self.active_tab = AccessGroupTab::General;
                Err(errors)
            },
        }
    }

    /// Back to the values the form was opened with.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors = FieldErrors::new();
        self.active_tab = AccessGroupTab::General;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_json() -> &'static str {
        r#"{
            "access_group_id": "ag_1",
            "access_group_name": "Eng Team",
            "description": null,
            "access_model_names": ["gpt-4o"],
            "access_mcp_server_ids": [],
            "access_agent_ids": [],
            "assigned_key_ids": ["sk-a", "sk-b"],
            "created_at": "2025-03-01T10:00:00Z",
            "created_by": "default_user_id",
            "updated_at": "2025-03-02T11:30:00Z"
        }"#
    }

    #[test]
    fn maps_response_with_missing_and_null_fields() -> Result<(), serde_json::Error> {
        let response: AccessGroupResponse = serde_json::from_str(response_json())?;
        let group = AccessGroup::from(response);
        assert_eq!(group.id, "ag_1");
        assert_eq!(group.description, None);
        assert_eq!(group.model_ids.as_slice(), ["gpt-4o"]);
        assert!(group.mcp_server_ids.is_empty());
        assert!(group.team_ids.is_empty());
        assert_eq!(group.key_ids.len(), 2);
        assert_eq!(group.audit.updated_by, None);
        Ok(())
    }

    #[test]
    fn empty_name_is_rejected_before_any_call() {
        let mut form = AccessGroupForm::create();
        form.set_tab(AccessGroupTab::Models);
        let result = form.submit();
        let errors = result.err().unwrap_or_default();
        assert_eq!(errors.message("name").as_deref(), Some("Group name is required"));
        assert_eq!(form.active_tab(), AccessGroupTab::General);
    }

    #[test]
    fn payload_renames_and_trims_fields() {
        let mut form = AccessGroupForm::create();
        form.set_name("  Eng Team ");
        form.set_description("   ");
        form.set_model_ids(vec!["gpt-4o".into(), "gpt-4o".into(), "claude-sonnet".into()]);
        form.set_agent_ids(vec!["agent-1".into()]);
        let params = form.submit();
        assert_eq!(
            params,
            Ok(AccessGroupCreateParams {
                access_group_name: "Eng Team".into(),
                description: None,
                access_model_names: vec!["gpt-4o".into(), "claude-sonnet".into()],
                access_mcp_server_ids: vec![],
                access_agent_ids: vec!["agent-1".into()],
            })
        );
    }

    #[test]
    fn edit_prefills_every_field_and_starts_clean() -> Result<(), serde_json::Error> {
        let response: AccessGroupResponse = serde_json::from_str(response_json())?;
        let mut group = AccessGroup::from(response);
        group.description = Some("Engineering".into());
        let form = AccessGroupForm::edit(&group, false);
        assert_eq!(form.values().name, "Eng Team");
        assert_eq!(form.values().description, "Engineering");
        assert_eq!(form.values().model_ids, vec!["gpt-4o".to_string()]);
        assert!(form.values().mcp_server_ids.is_empty());
        assert!(!form.is_dirty());
        Ok(())
    }

    #[test]
    fn locked_name_ignores_edits() -> Result<(), serde_json::Error> {
        let response: AccessGroupResponse = serde_json::from_str(response_json())?;
        let group = AccessGroup::from(response);
        let mut form = AccessGroupForm::edit(&group, true);
        form.set_name("Renamed");
        assert_eq!(form.values().name, "Eng Team");
        form.set_description("changed");
        assert!(form.is_dirty());
        form.reset();
        assert!(!form.is_dirty());
        Ok(())
    }

    #[test]
    fn sorts_by_creation_time() -> Result<(), serde_json::Error> {
        let older: AccessGroupResponse = serde_json::from_str(response_json())?;
        let mut newer = older.clone();
        newer.access_group_id = "ag_2".into();
        newer.created_at = older.created_at + chrono::Duration::days(1);
        let (older, newer) = (AccessGroup::from(older), AccessGroup::from(newer));
        assert_eq!(older.compare(&newer, AccessGroupSort::CreatedAt), Ordering::Less);
        Ok(())
    }
}
