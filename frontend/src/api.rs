//! REST collaborators. Every call returns `Result<_, ApiError>`; with the
//! `mock` feature the in-memory proxy answers instead of the network.

#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
use proxy_console_shared::{
    access_group::{AccessGroup, AccessGroupCreateParams, AccessGroupUpdateParams},
    agent::{Agent, AgentCreateRequest, AgentPatchRequest, AgentTypeInfo, KeySummary},
    plugin::{Plugin, PluginCreateRequest},
    ApiError,
};
use serde::{Deserialize, Serialize};
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "mock"))]
use crate::{config::api_url, storage};
#[cfg(feature = "mock")]
use crate::models;

/// Body of `POST /key/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyGenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
    pub agent_id: String,
}

/// The one-time key value returned on generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedKey {
    pub key: String,
    #[serde(default)]
    pub key_alias: Option<String>,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Serialize)]
struct KeyUpdateRequest<'a> {
    key: &'a str,
    agent_id: &'a str,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct McpServerEntry {
    server_id: String,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct AgentTypesResponse {
    #[serde(default)]
    agent_types: Vec<AgentTypeInfo>,
}

#[cfg(not(feature = "mock"))]
fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache");
    match storage::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

#[cfg(not(feature = "mock"))]
fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    prepare(builder)
        .build()
        .map_err(|e| ApiError::Serialize(format!("{:?}", e)))
}

#[cfg(not(feature = "mock"))]
fn build_json<T: Serialize + ?Sized>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
    prepare(builder)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(format!("{:?}", e)))
}

/// Send and turn non-2xx answers into [`ApiError::Http`], keeping the
/// backend's message when the body carries one.
#[cfg(not(feature = "mock"))]
async fn send(request: Request) -> Result<Response, ApiError> {
    let label = format!("{:?} {}", request.method(), request.url());
    let response = request.send().await.map_err(|e| {
        web_sys::console::error_1(&format!("{label} failed: {:?}", e).into());
        ApiError::Network(format!("{:?}", e))
    })?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    if status != 404 {
        web_sys::console::error_1(&format!("{label}: {error}").into());
    }
    Err(error)
}

#[cfg(not(feature = "mock"))]
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}

/// `Ok(None)` for a 404, so detail screens can show their not-found state.
#[cfg(not(feature = "mock"))]
async fn lookup<T: DeserializeOwned>(request: Request) -> Result<Option<T>, ApiError> {
    match send(request).await {
        Ok(response) => read_json(response).await.map(Some),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Access groups
// ---------------------------------------------------------------------------

pub async fn fetch_access_groups() -> Result<Vec<AccessGroup>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.list_access_groups())
            .into_iter()
            .map(AccessGroup::from)
            .collect());
    }

    #[cfg(not(feature = "mock"))]
    {
        let request = build(Request::get(&api_url("/v1/access_group")))?;
        let rows: Vec<proxy_console_shared::AccessGroupResponse> = read_json(send(request).await?).await?;
        Ok(rows.into_iter().map(AccessGroup::from).collect())
    }
}

pub async fn fetch_access_group(id: &str) -> Result<Option<AccessGroup>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.get_access_group(id)).map(AccessGroup::from));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/v1/access_group/{}", urlencoding::encode(id)));
        let row: Option<proxy_console_shared::AccessGroupResponse> =
            lookup(build(Request::get(&url))?).await?;
        Ok(row.map(AccessGroup::from))
    }
}

pub async fn create_access_group(params: &AccessGroupCreateParams) -> Result<AccessGroup, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.create_access_group(params.clone())).map(AccessGroup::from);
    }

    #[cfg(not(feature = "mock"))]
    {
        let request = build_json(Request::post(&api_url("/v1/access_group")), params)?;
        let row: proxy_console_shared::AccessGroupResponse = read_json(send(request).await?).await?;
        Ok(row.into())
    }
}

pub async fn update_access_group(
    id: &str,
    params: &AccessGroupUpdateParams,
) -> Result<AccessGroup, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.update_access_group(id, params.clone())).map(AccessGroup::from);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/v1/access_group/{}", urlencoding::encode(id)));
        let request = build_json(Request::put(&url), params)?;
        let row: proxy_console_shared::AccessGroupResponse = read_json(send(request).await?).await?;
        Ok(row.into())
    }
}

pub async fn delete_access_group(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.delete_access_group(id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/v1/access_group/{}", urlencoding::encode(id)));
        send(build(Request::delete(&url))?).await.map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Sibling collections used as form options
// ---------------------------------------------------------------------------

pub async fn fetch_model_names() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.models()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let body: ModelListResponse = read_json(send(build(Request::get(&api_url("/v1/models")))?).await?).await?;
        Ok(body.data.into_iter().map(|model| model.id).collect())
    }
}

pub async fn fetch_mcp_server_ids() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.mcp_servers()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let rows: Vec<McpServerEntry> =
            read_json(send(build(Request::get(&api_url("/v1/mcp/server")))?).await?).await?;
        Ok(rows.into_iter().map(|server| server.server_id).collect())
    }
}

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

pub async fn fetch_agents() -> Result<Vec<Agent>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.list_agents()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let body: proxy_console_shared::agent::AgentListResponse =
            read_json(send(build(Request::get(&api_url("/v1/agents")))?).await?).await?;
        Ok(body.agents)
    }
}

pub async fn fetch_agent(id: &str) -> Result<Option<Agent>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.get_agent(id)));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/v1/agents/{}", urlencoding::encode(id)));
        lookup(build(Request::get(&url))?).await
    }
}

pub async fn fetch_agent_types() -> Result<Vec<AgentTypeInfo>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.agent_types()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url("/v1/agents/create_metadata");
        let body: AgentTypesResponse = read_json(send(build(Request::get(&url))?).await?).await?;
        Ok(body.agent_types)
    }
}

pub async fn create_agent(request: &AgentCreateRequest) -> Result<Agent, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.create_agent(request.clone()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let request = build_json(Request::post(&api_url("/v1/agents")), request)?;
        read_json(send(request).await?).await
    }
}

pub async fn patch_agent(id: &str, patch: &AgentPatchRequest) -> Result<Agent, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.patch_agent(id, patch.clone()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/v1/agents/{}", urlencoding::encode(id)));
        read_json(send(build_json(Request::patch(&url), patch)?).await?).await
    }
}

pub async fn delete_agent(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.delete_agent(id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/v1/agents/{}", urlencoding::encode(id)));
        send(build(Request::delete(&url))?).await.map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Keys whose alias contains `alias`.
pub async fn search_keys(alias: &str) -> Result<Vec<KeySummary>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.search_keys(alias)));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!(
            "/key/list?return_full_object=true&key_alias={}",
            urlencoding::encode(alias.trim())
        ));
        let body: proxy_console_shared::agent::KeyListResponse =
            read_json(send(build(Request::get(&url))?).await?).await?;
        Ok(body.keys)
    }
}

pub async fn generate_agent_key(request: &KeyGenerateRequest) -> Result<GeneratedKey, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.generate_key(request.key_alias.clone(), request.models.clone()))
            .map(|key| GeneratedKey {
                key: key.token,
                key_alias: key.key_alias,
            });
    }

    #[cfg(not(feature = "mock"))]
    {
        let request = build_json(Request::post(&api_url("/key/generate")), request)?;
        read_json(send(request).await?).await
    }
}

pub async fn assign_key_to_agent(token: &str, agent_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.assign_key_to_agent(token, agent_id)).map(|_| ());
    }

    #[cfg(not(feature = "mock"))]
    {
        let body = KeyUpdateRequest {
            key: token,
            agent_id,
        };
        send(build_json(Request::post(&api_url("/key/update")), &body)?)
            .await
            .map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Plugins
// ---------------------------------------------------------------------------

pub async fn fetch_plugins() -> Result<Vec<Plugin>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::with_backend(|b| b.list_plugins()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let body: proxy_console_shared::plugin::PluginListResponse =
            read_json(send(build(Request::get(&api_url("/claude-code/plugins")))?).await?).await?;
        Ok(body.plugins)
    }
}

pub async fn create_plugin(request: &PluginCreateRequest) -> Result<Plugin, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.create_plugin(request.clone()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let request = build_json(Request::post(&api_url("/claude-code/plugins")), request)?;
        read_json(send(request).await?).await
    }
}

pub async fn set_plugin_enabled(name: &str, enabled: bool) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.set_plugin_enabled(name, enabled)).map(|_| ());
    }

    #[cfg(not(feature = "mock"))]
    {
        let action = if enabled { "enable" } else { "disable" };
        let url = api_url(&format!("/claude-code/plugins/{}/{}", urlencoding::encode(name), action));
        send(build(Request::post(&url))?).await.map(|_| ())
    }
}

pub async fn delete_plugin(name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::with_backend(|b| b.delete_plugin(name));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/claude-code/plugins/{}", urlencoding::encode(name)));
        send(build(Request::delete(&url))?).await.map(|_| ())
    }
}
