//! Agents, the agent type table and the add-agent wizard.

use std::{cmp::Ordering, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::{FieldErrors, ValidationError},
    resource::{AuditInfo, Resource},
    validation,
};

/// Type string of the built-in agent-to-agent protocol agent.
pub const A2A_AGENT_TYPE: &str = "a2a";
/// Type string of a bare agent with only a name and description.
pub const CUSTOM_AGENT_TYPE: &str = "custom";

const PROTOCOL_VERSION: &str = "1.0";
const DEFAULT_AGENT_VERSION: &str = "1.0.0";

/// Optional A2A capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AgentCapabilities {
    /// Agent can stream responses.
    #[serde(default)]
    pub streaming: bool,
}

/// A skill advertised on the agent card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSkill {
    /// Server-assigned id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A2A agent card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCardParams {
    /// A2A protocol version the agent speaks.
    pub protocol_version: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Endpoint the proxy forwards to.
    #[serde(default)]
    pub url: String,
    /// Agent version, semver.
    #[serde(default)]
    pub version: String,
    /// MIME-ish input modes, e.g. `text`.
    #[serde(default)]
    pub default_input_modes: Vec<String>,
    /// Output modes.
    #[serde(default)]
    pub default_output_modes: Vec<String>,
    /// Capability flags.
    #[serde(default)]
    pub capabilities: AgentCapabilities,
    /// Advertised skills.
    #[serde(default)]
    pub skills: Vec<AgentSkill>,
}

impl AgentCardParams {
    fn text_card(name: &str, description: &str, url: &str, version: &str, streaming: bool) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            version: version.to_string(),
            default_input_modes: vec!["text".to_string()],
            default_output_modes: vec!["text".to_string()],
            capabilities: AgentCapabilities {
                streaming,
            },
            skills: Vec::new(),
        }
    }
}

/// A registered agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Server-assigned id.
    pub agent_id: String,
    /// Display name.
    pub agent_name: String,
    /// Card for a2a and custom agents; provider agents may omit it.
    #[serde(default)]
    pub agent_card_params: Option<AgentCardParams>,
    /// Provider parameters passed through to the proxy.
    #[serde(default)]
    pub litellm_params: Map<String, Value>,
    /// Creation and update stamps.
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// Sortable agent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSort {
    /// By name, ignoring case.
    Name,
    /// By creation time.
    CreatedAt,
}

impl Resource for Agent {
    type SortKey = AgentSort;

    fn id(&self) -> &str {
        &self.agent_id
    }

    fn name(&self) -> &str {
        &self.agent_name
    }

    fn description(&self) -> Option<&str> {
        self.agent_card_params
            .as_ref()
            .map(|card| card.description.as_str())
            .filter(|text| !text.is_empty())
    }

    fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    fn compare(&self, other: &Self, key: AgentSort) -> Ordering {
        match key {
            AgentSort::Name => self.agent_name.to_lowercase().cmp(&other.agent_name.to_lowercase()),
            AgentSort::CreatedAt => self.audit.created_at.cmp(&other.audit.created_at),
        }
    }
}

/// `GET /v1/agents` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentListResponse {
    /// Agents in server order.
    #[serde(default)]
    pub agents: Vec<Agent>,
}

/// One credential input a provider agent type asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialField {
    /// Credential name, used as the params key.
    pub key: String,
    /// Label shown in the form.
    pub label: String,
    /// Blocks submit when blank.
    #[serde(default)]
    pub required: bool,
    /// `Some(false)` keeps the value out of `litellm_params`.
    #[serde(default)]
    pub include_in_litellm_params: Option<bool>,
    /// Rendered as a password input.
    #[serde(default)]
    pub secret: bool,
}

impl CredentialField {
    fn goes_into_params(&self) -> bool {
        self.include_in_litellm_params != Some(false)
    }
}

/// Server metadata describing a provider agent type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTypeInfo {
    /// Type id, e.g. `bedrock`.
    pub agent_type: String,
    /// Label for the type picker.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Reuse the a2a card fields instead of a credentials-only form.
    #[serde(default)]
    pub use_a2a_form_fields: bool,
    /// Params merged under the credentials.
    #[serde(default)]
    pub litellm_params_template: Option<Map<String, Value>>,
    /// Credential inputs, in display order.
    #[serde(default)]
    pub credential_fields: Vec<CredentialField>,
}

/// Input widget of a generated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    TextArea,
    /// URL input.
    Url,
    /// Masked input.
    Secret,
    /// JSON object text.
    Json,
    /// Checkbox.
    Toggle,
}

/// A field the details step renders for the chosen agent type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentField {
    /// Key into [`AgentFormValues`] or the credentials map.
    pub key: String,
    /// Label shown in the form.
    pub label: String,
    /// Blocks submit when blank.
    pub required: bool,
    /// Widget to render.
    pub kind: FieldKind,
}

impl AgentField {
    fn new(key: &str, label: &str, required: bool, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            required,
            kind,
        }
    }
}

/// Draft values of the details step. Credentials are keyed by
/// [`CredentialField::key`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentFormValues {
    /// Display name.
    pub agent_name: String,
    /// Free-text description.
    pub description: String,
    /// Agent endpoint.
    pub url: String,
    /// Version string.
    pub version: String,
    /// Streaming capability.
    pub streaming: bool,
    /// Raw JSON object text for `litellm_params`.
    pub litellm_params_json: String,
    /// Credential values by key.
    pub credentials: BTreeMap<String, String>,
}

/// `POST /v1/agents` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCreateRequest {
    /// Display name.
    pub agent_name: String,
    /// A2A card.
    pub agent_card_params: AgentCardParams,
    /// Absent for a2a agents without extra params.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub litellm_params: Option<Map<String, Value>>,
}

/// How an agent type turns form values into a request.
///
/// Looked up once per selected type; call sites never branch on the type
/// string themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentTemplate {
    /// Full A2A card: url, version, streaming, raw litellm params.
    A2a,
    /// Name and description only.
    Custom,
    /// Provider kind from server metadata.
    Provider(AgentTypeInfo),
}

impl AgentTemplate {
    /// Find the template for `agent_type`, consulting server metadata for
    /// anything but the built-ins.
    pub fn resolve(agent_type: &str, metadata: &[AgentTypeInfo]) -> Option<Self> {
        match agent_type {
            A2A_AGENT_TYPE => Some(Self::A2a),
            CUSTOM_AGENT_TYPE => Some(Self::Custom),
            other => metadata
                .iter()
                .find(|info| info.agent_type == other)
                .cloned()
                .map(Self::Provider),
        }
    }

    /// Every selectable `(type, label)`: built-ins first, then metadata.
    pub fn choices(metadata: &[AgentTypeInfo]) -> Vec<(String, String)> {
        let mut choices = vec![
            (A2A_AGENT_TYPE.to_string(), "A2A Agent".to_string()),
            (CUSTOM_AGENT_TYPE.to_string(), "Custom Agent".to_string()),
        ];
        choices.extend(metadata.iter().filter(|info| {
            info.agent_type != A2A_AGENT_TYPE && info.agent_type != CUSTOM_AGENT_TYPE
        }).map(|info| {
            (
                info.agent_type.clone(),
                info.display_name.clone().unwrap_or_else(|| info.agent_type.clone()),
            )
        }));
        choices
    }

    /// Type id sent to the proxy and used by the type table.
    pub fn agent_type(&self) -> &str {
        match self {
            Self::A2a => A2A_AGENT_TYPE,
            Self::Custom => CUSTOM_AGENT_TYPE,
            Self::Provider(info) => &info.agent_type,
        }
    }

    fn uses_a2a_fields(&self) -> bool {
        match self {
            Self::A2a => true,
            Self::Custom => false,
            Self::Provider(info) => info.use_a2a_form_fields,
        }
    }

    /// Fields the details step shows, in order.
    pub fn fields(&self) -> Vec<AgentField> {
        let mut fields = vec![
            AgentField::new("agent_name", "Agent Name", true, FieldKind::Text),
            AgentField::new("description", "Description", false, FieldKind::TextArea),
        ];
        if self.uses_a2a_fields() {
            fields.push(AgentField::new("url", "Agent URL", true, FieldKind::Url));
            fields.push(AgentField::new("version", "Version", false, FieldKind::Text));
            fields.push(AgentField::new("streaming", "Streaming", false, FieldKind::Toggle));
        }
        if matches!(self, Self::A2a) {
            fields.push(AgentField::new(
                "litellm_params_json",
                "LiteLLM Params (JSON)",
                false,
                FieldKind::Json,
            ));
        }
        if let Self::Provider(info) = self {
            fields.extend(info.credential_fields.iter().map(|field| AgentField {
                key: field.key.clone(),
                label: field.label.clone(),
                required: field.required,
                kind: if field.secret { FieldKind::Secret } else { FieldKind::Text },
            }));
        }
        fields
    }

    /// Validate `values` against this type and build the create request.
    pub fn build(&self, values: &AgentFormValues) -> Result<AgentCreateRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("agent_name", validation::required("Agent name", &values.agent_name));

        let name = values.agent_name.trim();
        let description = values.description.trim();

        let mut card = AgentCardParams::text_card(name, description, "", DEFAULT_AGENT_VERSION, false);
        let mut params: Option<Map<String, Value>> = None;

        if self.uses_a2a_fields() {
            let url = values.url.trim();
            match validation::required("Agent URL", url) {
                Ok(()) => errors.check("url", validation::http_url("Agent URL", url)),
                Err(err) => errors.push("url", err),
            }
            errors.check(
                "version",
                validation::optional(&values.version, |v| validation::semantic_version("Version", v)),
            );
            card.url = url.to_string();
            if !values.version.trim().is_empty() {
                card.version = values.version.trim().to_string();
            }
            card.capabilities.streaming = values.streaming;
        }

        match self {
            Self::A2a => match validation::json_object("LiteLLM params", &values.litellm_params_json) {
                Ok(map) if map.is_empty() => {},
                Ok(map) => params = Some(map),
                Err(err) => errors.push("litellm_params_json", err),
            },
            Self::Custom => {},
            Self::Provider(info) => {
                let mut merged = info.litellm_params_template.clone().unwrap_or_default();
                for field in &info.credential_fields {
                    let value = values
                        .credentials
                        .get(&field.key)
                        .map(|v| v.trim())
                        .unwrap_or_default();
                    if field.required && value.is_empty() {
                        errors.push(
                            field.key.as_str(),
                            ValidationError::Required {
                                field: "Credential",
                            },
                        );
                        continue;
                    }
                    if !value.is_empty() && field.goes_into_params() {
                        merged.insert(field.key.clone(), Value::String(value.to_string()));
                    }
                }
                params = Some(merged);
            },
        }

        errors.into_result(AgentCreateRequest {
            agent_name: name.to_string(),
            agent_card_params: card,
            litellm_params: params,
        })
    }
}

/// Guess which type table entry produced `agent`: a provider whose type
/// matches `litellm_params.custom_llm_provider`, else a2a.
pub fn detect_agent_type(agent: &Agent, metadata: &[AgentTypeInfo]) -> String {
    agent
        .litellm_params
        .get("custom_llm_provider")
        .and_then(Value::as_str)
        .filter(|provider| metadata.iter().any(|info| info.agent_type == *provider))
        .unwrap_or(A2A_AGENT_TYPE)
        .to_string()
}

/// Editable subset shown on the agent detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentEditValues {
    /// Display name.
    pub agent_name: String,
    /// Free-text description.
    pub description: String,
    /// Agent endpoint.
    pub url: String,
}

/// `PATCH /v1/agents/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPatchRequest {
    /// Display name.
    pub agent_name: String,
    /// Stored card with the edited fields applied.
    pub agent_card_params: AgentCardParams,
}

impl AgentEditValues {
    /// Prefill from the stored agent.
    pub fn from_agent(agent: &Agent) -> Self {
        let card = agent.agent_card_params.as_ref();
        Self {
            agent_name: agent.agent_name.clone(),
            description: card.map(|c| c.description.clone()).unwrap_or_default(),
            url: card.map(|c| c.url.clone()).unwrap_or_default(),
        }
    }

    /// Validate and apply onto the stored card.
    pub fn to_patch(&self, agent: &Agent) -> Result<AgentPatchRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("agent_name", validation::required("Agent name", &self.agent_name));
        errors.check(
            "url",
            validation::optional(&self.url, |v| validation::http_url("Agent URL", v.trim())),
        );
        let name = self.agent_name.trim();
        let mut card = agent.agent_card_params.clone().unwrap_or_else(|| {
            AgentCardParams::text_card(name, "", "", DEFAULT_AGENT_VERSION, false)
        });
        card.name = name.to_string();
        card.description = self.description.trim().to_string();
        card.url = self.url.trim().to_string();
        errors.into_result(AgentPatchRequest {
            agent_name: name.to_string(),
            agent_card_params: card,
        })
    }
}

/// Key summary as `GET /key/list` returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySummary {
    /// Key token, the secret itself.
    pub token: String,
    /// Human alias, when set.
    #[serde(default)]
    pub key_alias: Option<String>,
    /// Key name, when set.
    #[serde(default)]
    pub key_name: Option<String>,
}

impl KeySummary {
    /// Alias when set, else the token's first 12 characters and an ellipsis.
    pub fn display_label(&self) -> String {
        match self.key_alias.as_deref().filter(|alias| !alias.is_empty()) {
            Some(alias) => alias.to_string(),
            None => {
                let head: String = self.token.chars().take(12).collect();
                format!("{head}…")
            },
        }
    }
}

/// `GET /key/list` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyListResponse {
    /// Matching keys.
    #[serde(default)]
    pub keys: Vec<KeySummary>,
}

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Agent details form.
    Details,
    /// Key choice.
    AssignKey,
    /// Summary after submit.
    Done,
}

/// Key choice on the assign-key step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAssignOption {
    /// Generate a new key for the agent.
    CreateNew,
    /// Attach a key that already exists.
    Existing,
    /// Leave the agent without a key.
    Skip,
}

/// What to do about a key once the agent exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPlan {
    /// Generate a key limited to `models`.
    Create {
        /// Alias for the new key.
        key_name: String,
        /// Models the key may call.
        models: Vec<String>,
    },
    /// Attach the key with this token.
    Attach {
        /// Token of the existing key.
        token: String,
    },
    /// No key work.
    None,
}

/// Everything the submit handler needs, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSubmission {
    /// Agent create body.
    pub request: AgentCreateRequest,
    /// Key work after the agent exists.
    pub key_plan: KeyPlan,
}

/// Result shown on the final step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardOutcome {
    /// Display name.
    pub agent_name: String,
    /// Newly generated key value, shown once.
    pub created_key: Option<String>,
    /// Alias of an attached existing key.
    pub assigned_key_alias: Option<String>,
}

/// Add-agent wizard state.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentWizard {
    step: WizardStep,
    agent_type: String,
    /// Details step draft.
    pub values: AgentFormValues,
    /// Key choice.
    pub key_option: KeyAssignOption,
    /// Seeded as `{agent_name}-key` on the first advance.
    pub new_key_name: String,
    /// Models the new key may call.
    pub new_key_models: Vec<String>,
    /// Key picked on the existing-key option.
    pub existing_key: Option<KeySummary>,
    errors: FieldErrors,
    outcome: Option<WizardOutcome>,
}

impl Default for AgentWizard {
    fn default() -> Self {
        Self {
            step: WizardStep::Details,
            agent_type: A2A_AGENT_TYPE.to_string(),
            values: AgentFormValues::default(),
            key_option: KeyAssignOption::CreateNew,
            new_key_name: String::new(),
            new_key_models: Vec::new(),
            existing_key: None,
            errors: FieldErrors::new(),
            outcome: None,
        }
    }
}

impl AgentWizard {
    /// Fresh wizard on the details step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Selected type id.
    pub fn agent_type(&self) -> &str {
        &self.agent_type
    }

    /// Errors from the last advance or submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Set once the wizard reaches Done.
    pub fn outcome(&self) -> Option<&WizardOutcome> {
        self.outcome.as_ref()
    }

    /// Switch agent type. Credentials belong to the old type and are dropped.
    pub fn set_agent_type(&mut self, agent_type: impl Into<String>) {
        let agent_type = agent_type.into();
        if agent_type != self.agent_type {
            self.values.credentials.clear();
            self.errors = FieldErrors::new();
        }
        self.agent_type = agent_type;
    }

    /// Advance from details to key assignment. Only the name is checked
    /// here; the rest is validated on submit.
    pub fn next(&mut self) -> bool {
        if self.step != WizardStep::Details {
            return false;
        }
        let mut errors = FieldErrors::new();
        errors.check("agent_name", validation::required("Agent name", &self.values.agent_name));
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        if self.new_key_name.trim().is_empty() {
            self.new_key_name = format!("{}-key", self.values.agent_name.trim());
        }
        self.errors = FieldErrors::new();
        self.step = WizardStep::AssignKey;
        true
    }

    /// Return to details. Values are kept.
    pub fn back(&mut self) {
        if self.step == WizardStep::AssignKey {
            self.step = WizardStep::Details;
        }
    }

    /// Validate everything and produce the calls to make. Details errors
    /// send the wizard back to the first step.
    pub fn prepare_submit(
        &mut self,
        metadata: &[AgentTypeInfo],
    ) -> Result<AgentSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();
        let request = match AgentTemplate::resolve(&self.agent_type, metadata) {
            Some(template) => match template.build(&self.values) {
                Ok(request) => Some(request),
                Err(details) => {
                    for (field, error) in details.iter() {
                        errors.push(field, error.clone());
                    }
                    None
                },
            },
            None => {
                errors.push("agent_type", ValidationError::SelectionRequired {
                    field: "Agent type",
                });
                None
            },
        };

        let key_plan = match self.key_option {
            KeyAssignOption::CreateNew if !self.new_key_name.trim().is_empty() => KeyPlan::Create {
                key_name: self.new_key_name.trim().to_string(),
                models: self.new_key_models.clone(),
            },
            KeyAssignOption::CreateNew | KeyAssignOption::Skip => KeyPlan::None,
            KeyAssignOption::Existing => match &self.existing_key {
                Some(key) => KeyPlan::Attach {
                    token: key.token.clone(),
                },
                None => {
                    errors.push("existing_key", ValidationError::SelectionRequired {
                        field: "Existing key",
                    });
                    KeyPlan::None
                },
            },
        };

        match request {
            Some(request) if errors.is_empty() => {
                self.errors = FieldErrors::new();
                Ok(AgentSubmission {
                    request,
                    key_plan,
                })
            },
            _ => {
                if errors.get("existing_key").is_none() || errors.len() > 1 {
                    self.step = WizardStep::Details;
                }
                self.errors = errors.clone();
                tracing::debug!(fields = errors.len(), "agent wizard submit rejected");
                Err(errors)
            },
        }
    }

    /// Record what was created and move to the final step.
    pub fn finish(&mut self, outcome: WizardOutcome) {
        self.outcome = Some(outcome);
        self.step = WizardStep::Done;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bedrock() -> AgentTypeInfo {
        AgentTypeInfo {
            agent_type: "bedrock_agentcore".into(),
            display_name: Some("Bedrock AgentCore".into()),
            description: None,
            use_a2a_form_fields: true,
            litellm_params_template: json!({"custom_llm_provider": "bedrock_agentcore"})
                .as_object()
                .cloned(),
            credential_fields: vec![
                CredentialField {
                    key: "aws_region_name".into(),
                    label: "AWS Region".into(),
                    required: true,
                    include_in_litellm_params: None,
                    secret: false,
                },
                CredentialField {
                    key: "display_only".into(),
                    label: "Note".into(),
                    required: false,
                    include_in_litellm_params: Some(false),
                    secret: false,
                },
            ],
        }
    }

    fn a2a_values() -> AgentFormValues {
        AgentFormValues {
            agent_name: "support-bot".into(),
            description: " Answers tickets ".into(),
            url: "https://agents.example.com/support".into(),
            ..AgentFormValues::default()
        }
    }

    #[test]
    fn custom_agent_gets_default_card() {
        let values = AgentFormValues {
            agent_name: "notes".into(),
            ..AgentFormValues::default()
        };
        let request = AgentTemplate::Custom.build(&values);
        let request = request.ok();
        assert_eq!(request.as_ref().map(|r| r.agent_card_params.version.as_str()), Some("1.0.0"));
        assert_eq!(request.as_ref().map(|r| r.agent_card_params.url.as_str()), Some(""));
        assert_eq!(request.and_then(|r| r.litellm_params), None);
    }

    #[test]
    fn a2a_requires_valid_url_and_json_params() {
        let mut values = a2a_values();
        values.url = "agents.example.com/".into();
        values.litellm_params_json = "[]".into();
        values.version = "one".into();
        let errors = AgentTemplate::A2a.build(&values).err().unwrap_or_default();
        assert!(errors.get("url").is_some());
        assert!(errors.get("litellm_params_json").is_some());
        assert!(errors.get("version").is_some());
    }

    #[test]
    fn a2a_payload_is_trimmed_and_serializes_camel_case() -> Result<(), serde_json::Error> {
        let mut values = a2a_values();
        values.litellm_params_json = r#"{"model":"gpt-4o"}"#.into();
        let request = AgentTemplate::A2a.build(&values).ok();
        let body = serde_json::to_value(&request)?;
        assert_eq!(body["agent_card_params"]["protocolVersion"], "1.0");
        assert_eq!(body["agent_card_params"]["description"], "Answers tickets");
        assert_eq!(body["agent_card_params"]["defaultInputModes"], json!(["text"]));
        assert_eq!(body["litellm_params"]["model"], "gpt-4o");
        Ok(())
    }

    #[test]
    fn provider_merges_template_and_credentials() {
        let info = bedrock();
        let template = AgentTemplate::resolve("bedrock_agentcore", std::slice::from_ref(&info));
        assert_eq!(template, Some(AgentTemplate::Provider(info.clone())));

        let mut values = a2a_values();
        values.credentials.insert("aws_region_name".into(), "us-east-1".into());
        values.credentials.insert("display_only".into(), "hidden".into());
        let params = AgentTemplate::Provider(info)
            .build(&values)
            .ok()
            .and_then(|r| r.litellm_params)
            .unwrap_or_default();
        assert_eq!(params.get("custom_llm_provider"), Some(&json!("bedrock_agentcore")));
        assert_eq!(params.get("aws_region_name"), Some(&json!("us-east-1")));
        assert_eq!(params.get("display_only"), None);
    }

    #[test]
    fn provider_required_credentials_are_checked() {
        let errors = AgentTemplate::Provider(bedrock())
            .build(&a2a_values())
            .err()
            .unwrap_or_default();
        assert!(errors.get("aws_region_name").is_some());
    }

    #[test]
    fn fields_follow_type_table() {
        let custom: Vec<_> = AgentTemplate::Custom.fields().into_iter().map(|f| f.key).collect();
        assert_eq!(custom, ["agent_name", "description"]);
        let provider: Vec<_> =
            AgentTemplate::Provider(bedrock()).fields().into_iter().map(|f| f.key).collect();
        assert!(provider.contains(&"url".to_string()));
        assert!(provider.contains(&"aws_region_name".to_string()));
        assert!(!provider.contains(&"litellm_params_json".to_string()));
    }

    #[test]
    fn wizard_requires_name_and_seeds_key_name() {
        let mut wizard = AgentWizard::new();
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Details);
        assert!(wizard.errors().get("agent_name").is_some());

        wizard.values.agent_name = "support-bot".into();
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::AssignKey);
        assert_eq!(wizard.new_key_name, "support-bot-key");

        wizard.back();
        wizard.new_key_name = "custom-key".into();
        assert!(wizard.next());
        assert_eq!(wizard.new_key_name, "custom-key");
    }

    #[test]
    fn existing_key_option_needs_a_selection() {
        let mut wizard = AgentWizard::new();
        wizard.values = a2a_values();
        assert!(wizard.next());
        wizard.key_option = KeyAssignOption::Existing;
        let errors = wizard.prepare_submit(&[]).err().unwrap_or_default();
        assert!(errors.get("existing_key").is_some());
        assert_eq!(wizard.step(), WizardStep::AssignKey);

        wizard.existing_key = Some(KeySummary {
            token: "sk-abcdef1234567890".into(),
            key_alias: None,
            key_name: None,
        });
        let submission = wizard.prepare_submit(&[]).ok();
        assert_eq!(
            submission.map(|s| s.key_plan),
            Some(KeyPlan::Attach {
                token: "sk-abcdef1234567890".into()
            })
        );
    }

    #[test]
    fn details_errors_on_submit_return_to_first_step() {
        let mut wizard = AgentWizard::new();
        wizard.values.agent_name = "bot".into();
        assert!(wizard.next());
        assert!(wizard.prepare_submit(&[]).is_err());
        assert_eq!(wizard.step(), WizardStep::Details);
        assert!(wizard.errors().get("url").is_some());
    }

    #[test]
    fn key_label_prefers_alias() {
        let key = KeySummary {
            token: "sk-abcdef1234567890".into(),
            key_alias: None,
            key_name: None,
        };
        assert_eq!(key.display_label(), "sk-abcdef123…");
        let aliased = KeySummary {
            key_alias: Some("prod".into()),
            ..key
        };
        assert_eq!(aliased.display_label(), "prod");
    }

    #[test]
    fn detects_provider_type_from_params() {
        let agent: Agent = serde_json::from_value(json!({
            "agent_id": "a1",
            "agent_name": "bot",
            "litellm_params": {"custom_llm_provider": "bedrock_agentcore"},
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap_or_else(|err| panic!("fixture: {err}"));
        assert_eq!(detect_agent_type(&agent, &[bedrock()]), "bedrock_agentcore");
        assert_eq!(detect_agent_type(&agent, &[]), A2A_AGENT_TYPE);
    }
}
