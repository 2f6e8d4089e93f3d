//! Field validators used by every create/edit form.
//!
//! Validators only judge; they never rewrite the value, so `" name "`
//! fails kebab-case as given. Forms trim each field once and hand the
//! trimmed text to both the validator and the payload, so what passes
//! validation is exactly what gets sent.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::ValidationError;

static KEBAB_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("kebab-case pattern is valid"));

static SEMVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    )
    .expect("semver pattern is valid")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static REPO_SLUG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+/[a-zA-Z0-9_-]+$").expect("repo slug pattern is valid")
});

/// Non-blank after trimming.
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field,
        });
    }
    Ok(())
}

/// Lowercase letters, digits and hyphens only.
pub fn kebab_case(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if KEBAB_CASE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::NotKebabCase {
            field,
        })
    }
}

/// `MAJOR.MINOR.PATCH` with optional pre-release and build metadata.
pub fn semantic_version(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if SEMVER.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::NotSemver {
            field,
        })
    }
}

/// `local@domain.tld`, no whitespace.
pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::NotEmail {
            field,
        })
    }
}

/// Absolute `http`/`https` URL with a host and no trailing slash.
pub fn http_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::NotUrl {
        field,
    };
    if value.ends_with('/') || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let parsed = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// `owner/repo` as GitHub spells it.
pub fn repo_slug(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if REPO_SLUG.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::NotRepoSlug {
            field,
        })
    }
}

/// Run `check` only when `value` is non-blank.
pub fn optional(
    value: &str,
    check: impl FnOnce(&str) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        check(value)
    }
}

/// Parse `value` as a JSON object. Blank input means an empty object.
pub fn json_object(
    field: &'static str,
    value: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(serde_json::Map::new());
    }
    match serde_json::from_str::<serde_json::Value>(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(ValidationError::NotJsonObject {
            field,
            reason: "expected an object".to_string(),
        }),
        Err(err) => Err(ValidationError::NotJsonObject {
            field,
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required("Name", "").is_err());
        assert!(required("Name", "   ").is_err());
        assert!(required("Name", "Eng Team").is_ok());
    }

    #[test]
    fn kebab_case_rules() {
        assert!(kebab_case("Name", "my-plugin-2").is_ok());
        assert!(kebab_case("Name", "My-Plugin").is_err());
        assert!(kebab_case("Name", "my_plugin").is_err());
        assert!(kebab_case("Name", " my-plugin").is_err());
        assert!(kebab_case("Name", "").is_err());
    }

    #[test]
    fn semver_rules() {
        for ok in ["1.0.0", "0.12.3", "2.0.0-rc.1", "1.2.3+build.7"] {
            assert!(semantic_version("Version", ok).is_ok(), "{ok}");
        }
        for bad in ["1.0", "v1.0.0", "01.0.0", "1.0.0.0", "latest"] {
            assert!(semantic_version("Version", bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn email_rules() {
        assert!(email("Email", "dev@example.com").is_ok());
        assert!(email("Email", "dev@example").is_err());
        assert!(email("Email", "dev example@x.io").is_err());
    }

    #[test]
    fn url_requires_scheme_host_and_no_trailing_slash() {
        assert!(http_url("Homepage", "https://example.com").is_ok());
        assert!(http_url("Homepage", "http://localhost:4000/agents").is_ok());
        assert!(http_url("Homepage", "https://example.com/").is_err());
        assert!(http_url("Homepage", "example.com").is_err());
        assert!(http_url("Homepage", "ftp://example.com").is_err());
        assert!(http_url("Homepage", "https:// example.com").is_err());
    }

    #[test]
    fn repo_slug_rules() {
        assert!(repo_slug("Repository", "anthropics/claude-plugins").is_ok());
        assert!(repo_slug("Repository", "just-a-name").is_err());
        assert!(repo_slug("Repository", "a/b/c").is_err());
        assert!(repo_slug("Repository", "acme/plugins.git").is_err());
        assert!(repo_slug("Repository", "acme_labs/review-kit").is_ok());
    }

    #[test]
    fn optional_skips_blank_values() {
        assert!(optional("", |v| email("Email", v)).is_ok());
        assert!(optional("nope", |v| email("Email", v)).is_err());
    }

    #[test]
    fn json_object_parsing() {
        assert!(json_object("Params", "").map(|m| m.is_empty()).unwrap_or(false));
        assert!(json_object("Params", r#"{"model":"gpt-4o"}"#).is_ok());
        assert!(json_object("Params", "[1,2]").is_err());
        assert!(json_object("Params", "{not json").is_err());
    }
}
