//! Error taxonomy shared by the REST collaborators and the form layer.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Failure of a REST call, as seen by a screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP error: {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request payload could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: extract_backend_message(body),
        }
    }

    /// Text to show in a notification: the backend message when one was
    /// provided, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// `true` for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

/// Pull a human readable message out of a proxy error body.
///
/// Accepted shapes: `{"detail": {"error": "..."}}`, `{"detail": "..."}`,
/// `{"error": {"message": "..."}}`, `{"error": "..."}` and
/// `{"message": "..."}`. Anything else yields `None`.
pub fn extract_backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let candidate = match value.get("detail") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(detail) => detail
            .get("error")
            .or_else(|| detail.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string),
        None => None,
    }
    .or_else(|| match value.get("error") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(error) => error.get("message").and_then(Value::as_str).map(str::to_string),
        None => None,
    })
    .or_else(|| value.get("message").and_then(Value::as_str).map(str::to_string));

    candidate
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// A single field failing one validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required value missing or blank.
    #[error("{field} is required")]
    Required {
        /// Field label.
        field: &'static str,
    },
    /// Value is not lowercase letters, digits and hyphens.
    #[error("{field} must be kebab-case (lowercase letters, numbers and hyphens)")]
    NotKebabCase {
        /// Field label.
        field: &'static str,
    },
    /// Value is not `MAJOR.MINOR.PATCH` with optional pre-release/build.
    #[error("{field} must be a semantic version such as 1.0.0")]
    NotSemver {
        /// Field label.
        field: &'static str,
    },
    /// Value is not an email address.
    #[error("{field} must be a valid email address")]
    NotEmail {
        /// Field label.
        field: &'static str,
    },
    /// Value is not an absolute http(s) URL without trailing slash.
    #[error("{field} must be an http(s) URL without a trailing slash")]
    NotUrl {
        /// Field label.
        field: &'static str,
    },
    /// Value is not `owner/repo`.
    #[error("{field} must look like owner/repo")]
    NotRepoSlug {
        /// Field label.
        field: &'static str,
    },
    /// Value is not a JSON object.
    #[error("{field} must be a JSON object: {reason}")]
    NotJsonObject {
        /// Field label.
        field: &'static str,
        /// Parser complaint.
        reason: String,
    },
    /// A selection is mandatory for the chosen option.
    #[error("{field}: please make a selection")]
    SelectionRequired {
        /// Field label.
        field: &'static str,
    },
}

/// Per-field validation outcome of a whole form. Keys are form field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl FieldErrors {
    /// Empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first failure for `field`; later failures for the same
    /// field are ignored so the message matches the first broken rule.
    pub fn push(&mut self, field: impl Into<String>, error: ValidationError) {
        self.errors.entry(field.into()).or_insert(error);
    }

    /// Record `result` if it is an error.
    pub fn check(&mut self, field: impl Into<String>, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.push(field, error);
        }
    }

    /// Error for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Message for `field`, if any.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// `true` when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate `(field, error)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (field.as_str(), error))
    }

    /// `Ok(value)` when empty, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            tracing::debug!(fields = self.len(), "form rejected by validation");
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nested_detail_error() {
        let body = r#"{"detail":{"error":"Access group name already exists"}}"#;
        assert_eq!(
            extract_backend_message(body).as_deref(),
            Some("Access group name already exists")
        );
    }

    #[test]
    fn extracts_plain_detail_and_openai_style_error() {
        assert_eq!(extract_backend_message(r#"{"detail":"nope"}"#).as_deref(), Some("nope"));
        assert_eq!(
            extract_backend_message(r#"{"error":{"message":"bad key","type":"auth"}}"#).as_deref(),
            Some("bad key")
        );
        assert_eq!(extract_backend_message(r#"{"message":"  spaced  "}"#).as_deref(), Some("spaced"));
    }

    #[test]
    fn ignores_non_json_and_blank_messages() {
        assert_eq!(extract_backend_message("<html>502</html>"), None);
        assert_eq!(extract_backend_message(r#"{"detail":""}"#), None);
        assert_eq!(extract_backend_message(r#"{"status":"error"}"#), None);
    }

    #[test]
    fn user_message_falls_back_without_backend_text() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");

        let err = ApiError::from_response(400, r#"{"detail":{"error":"name taken"}}"#);
        assert_eq!(err.user_message("Something went wrong"), "name taken");

        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn not_found_is_only_404() {
        assert!(ApiError::from_response(404, "").is_not_found());
        assert!(!ApiError::from_response(403, "").is_not_found());
        assert!(!ApiError::Parse("x".into()).is_not_found());
    }

    #[test]
    fn field_errors_keep_first_failure() {
        let mut errors = FieldErrors::new();
        errors.push("name", ValidationError::Required { field: "Name" });
        errors.push("name", ValidationError::NotKebabCase { field: "Name" });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("name").as_deref(), Some("Name is required"));
        assert!(errors.into_result(()).is_err());
    }
}
