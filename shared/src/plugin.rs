//! Marketplace plugins and the add-plugin form.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::FieldErrors,
    resource::{AuditInfo, Resource},
    validation,
};

/// Categories offered by the add form.
pub const PLUGIN_CATEGORIES: [&str; 8] = [
    "Development",
    "Productivity",
    "Learning",
    "Security",
    "Data & Analytics",
    "Integration",
    "Testing",
    "Documentation",
];

/// Where the plugin is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum PluginSource {
    /// Hosted on GitHub.
    Github {
        /// `owner/repo` slug.
        repo: String,
    },
    /// Any git remote.
    Url {
        /// Clone URL.
        url: String,
    },
}

impl PluginSource {
    /// Repo slug or git URL, whichever applies.
    pub fn location(&self) -> &str {
        match self {
            Self::Github {
                repo,
            } => repo,
            Self::Url {
                url,
            } => url,
        }
    }
}

/// Plugin author; both parts optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PluginAuthor {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A registered plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    /// Server-assigned id.
    pub id: String,
    /// Unique, kebab-case.
    pub name: String,
    /// Version string.
    #[serde(default)]
    pub version: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// One of [`PLUGIN_CATEGORIES`] when set.
    #[serde(default)]
    pub category: Option<String>,
    /// Keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Author details.
    #[serde(default)]
    pub author: Option<PluginAuthor>,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Where the plugin comes from.
    pub source: PluginSource,
    /// Visible in the marketplace.
    #[serde(default)]
    pub enabled: bool,
    /// Creation and update stamps.
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// Sortable plugin columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginSort {
    /// By name, ignoring case.
    Name,
    /// Numeric, unversioned first.
    Version,
    /// By creation time.
    CreatedAt,
}

impl Resource for Plugin {
    type SortKey = PluginSort;

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

    fn compare(&self, other: &Self, key: PluginSort) -> Ordering {
        match key {
            PluginSort::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            // Unversioned plugins sort first.
            PluginSort::Version => version_parts(self.version.as_deref())
                .cmp(&version_parts(other.version.as_deref())),
            PluginSort::CreatedAt => self.audit.created_at.cmp(&other.audit.created_at),
        }
    }
}

fn version_parts(version: Option<&str>) -> Option<Vec<u64>> {
    version.map(|v| {
        v.split(['-', '+'])
            .next()
            .unwrap_or_default()
            .split('.')
            .map(|part| part.parse().unwrap_or(0))
            .collect()
    })
}

/// `GET /claude-code/plugins` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginListResponse {
    /// Plugins in server order.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

/// `POST /claude-code/plugins` body. Blank optionals are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCreateRequest {
    /// Display name.
    pub name: String,
    /// Where the plugin comes from.
    pub source: PluginSource,
    /// Version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Author details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PluginAuthor>,
    /// Homepage URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Source selector on the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluginSourceKind {
    /// `owner/repo` on GitHub.
    #[default]
    Github,
    /// Any git URL.
    Url,
}

/// Add-plugin form draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginFormValues {
    /// Display name.
    pub name: String,
    source_kind: PluginSourceKind,
    /// Used when the source is GitHub.
    pub repo: String,
    /// Used when the source is a git URL.
    pub url: String,
    /// Version string.
    pub version: String,
    /// Free-text description.
    pub description: String,
    /// Category.
    pub category: String,
    /// Comma-separated.
    pub keywords: String,
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// Homepage URL.
    pub homepage: String,
}

/// Split comma-separated keywords: trimmed, blanks dropped, first
/// occurrence kept.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keywords.iter().any(|seen| seen == keyword) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl PluginFormValues {
    /// Selected source type.
    pub fn source_kind(&self) -> PluginSourceKind {
        self.source_kind
    }

    /// Switch source type; the old repo or url does not carry over.
    pub fn set_source_kind(&mut self, kind: PluginSourceKind) {
        if kind != self.source_kind {
            self.repo.clear();
            self.url.clear();
        }
        self.source_kind = kind;
    }

    /// Validate and build the create body. Strings are trimmed once and the
    /// trimmed text is what gets validated and sent.
    pub fn to_request(&self) -> Result<PluginCreateRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        match validation::required("Plugin name", &self.name) {
            Ok(()) => errors.check("name", validation::kebab_case("Plugin name", self.name.trim())),
            Err(err) => errors.push("name", err),
        }

        let source = match self.source_kind {
            PluginSourceKind::Github => {
                match validation::required("Repository", &self.repo) {
                    Ok(()) => errors.check("repo", validation::repo_slug("Repository", self.repo.trim())),
                    Err(err) => errors.push("repo", err),
                }
                PluginSource::Github {
                    repo: self.repo.trim().to_string(),
                }
            },
            PluginSourceKind::Url => {
                errors.check("url", validation::required("Git URL", &self.url));
                PluginSource::Url {
                    url: self.url.trim().to_string(),
                }
            },
        };

        errors.check(
            "version",
            validation::optional(&self.version, |v| validation::semantic_version("Version", v.trim())),
        );
        errors.check(
            "author_email",
            validation::optional(&self.author_email, |v| validation::email("Author email", v.trim())),
        );
        errors.check(
            "homepage",
            validation::optional(&self.homepage, |v| validation::http_url("Homepage", v.trim())),
        );

        let author_name = non_blank(&self.author_name);
        let author_email = non_blank(&self.author_email);
        let author = (author_name.is_some() || author_email.is_some()).then_some(PluginAuthor {
            name: author_name,
            email: author_email,
        });
        let keywords = parse_keywords(&self.keywords);

        errors.into_result(PluginCreateRequest {
            name: self.name.trim().to_string(),
            source,
            version: non_blank(&self.version),
            description: non_blank(&self.description),
            author,
            homepage: non_blank(&self.homepage),
            category: non_blank(&self.category),
            keywords: (!keywords.is_empty()).then_some(keywords),
        })
    }
}

/// Build a stored plugin from a create request.
pub fn plugin_from_request(
    id: String,
    request: PluginCreateRequest,
    at: DateTime<Utc>,
    by: Option<String>,
) -> Plugin {
    Plugin {
        id,
        name: request.name,
        version: request.version,
        description: request.description,
        category: request.category,
        keywords: request.keywords.unwrap_or_default(),
        author: request.author,
        homepage: request.homepage,
        source: request.source,
        enabled: true,
        audit: AuditInfo::created(at, by),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filled() -> PluginFormValues {
        PluginFormValues {
            name: " code-review ".into(),
            repo: "anthropics/claude-code".into(),
            ..PluginFormValues::default()
        }
    }

    #[test]
    fn keywords_are_trimmed_deduplicated_and_blank_free() {
        assert_eq!(parse_keywords(" git, review,,git , ci "), ["git", "review", "ci"]);
        assert!(parse_keywords(" , ").is_empty());
    }

    #[test]
    fn minimal_payload_omits_blank_optionals() -> Result<(), serde_json::Error> {
        let request = filled().to_request().ok();
        let body = serde_json::to_value(&request)?;
        assert_eq!(
            body,
            json!({
                "name": "code-review",
                "source": {"source": "github", "repo": "anthropics/claude-code"}
            })
        );
        Ok(())
    }

    #[test]
    fn author_object_only_when_name_or_email_given() {
        let mut values = filled();
        values.author_email = " dev@example.com ".into();
        let author = values.to_request().ok().and_then(|r| r.author);
        assert_eq!(
            author,
            Some(PluginAuthor {
                name: None,
                email: Some("dev@example.com".into()),
            })
        );
    }

    #[test]
    fn invalid_fields_are_reported_per_field() {
        let values = PluginFormValues {
            name: "Code Review".into(),
            repo: "not a slug".into(),
            version: "v1".into(),
            author_email: "nobody".into(),
            homepage: "https://example.com/".into(),
            ..PluginFormValues::default()
        };
        let errors = values.to_request().err().unwrap_or_default();
        for field in ["name", "repo", "version", "author_email", "homepage"] {
            assert!(errors.get(field).is_some(), "{field} should fail");
        }
    }

    #[test]
    fn switching_source_clears_location() {
        let mut values = filled();
        values.set_source_kind(PluginSourceKind::Url);
        assert!(values.repo.is_empty());
        assert!(values.to_request().err().unwrap_or_default().get("url").is_some());

        values.url = "https://git.example.com/tools.git".into();
        values.set_source_kind(PluginSourceKind::Url);
        assert_eq!(values.url, "https://git.example.com/tools.git");
        let source = values.to_request().ok().map(|r| r.source);
        assert_eq!(
            source,
            Some(PluginSource::Url {
                url: "https://git.example.com/tools.git".into()
            })
        );
    }

    #[test]
    fn version_sort_is_numeric() {
        let at = Utc::now();
        let mk = |name: &str, version: Option<&str>| {
            let mut values = filled();
            values.name = name.into();
            values.version = version.unwrap_or_default().into();
            let request = values.to_request().unwrap_or_else(|errors| panic!("{errors:?}"));
            plugin_from_request(name.into(), request, at, None)
        };
        let a = mk("a", Some("1.10.0"));
        let b = mk("b", Some("1.9.2"));
        let c = mk("c", None);
        assert_eq!(a.compare(&b, PluginSort::Version), Ordering::Greater);
        assert_eq!(c.compare(&b, PluginSort::Version), Ordering::Less);
    }

    #[test]
    fn name_sort_ignores_case() {
        let request = filled().to_request().unwrap_or_else(|errors| panic!("{errors:?}"));
        let mut upper = plugin_from_request("p1".into(), request.clone(), Utc::now(), None);
        upper.name = "Beta-Tools".into();
        let mut lower = plugin_from_request("p2".into(), request, Utc::now(), None);
        lower.name = "alpha-kit".into();
        assert_eq!(upper.compare(&lower, PluginSort::Name), Ordering::Greater);
        assert_eq!(lower.compare(&upper, PluginSort::Name), Ordering::Less);
    }

    #[test]
    fn padded_fields_validate_and_send_trimmed() {
        let values = PluginFormValues {
            name: "  code-review ".into(),
            repo: " anthropics/claude-code ".into(),
            version: " 1.2.0 ".into(),
            ..PluginFormValues::default()
        };
        let request = values.to_request().unwrap_or_else(|errors| panic!("{errors:?}"));
        assert_eq!(request.name, "code-review");
        assert_eq!(request.source.location(), "anthropics/claude-code");
        assert_eq!(request.version.as_deref(), Some("1.2.0"));
    }
}
