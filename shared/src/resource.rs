//! The resource abstraction every CRUD screen is generic over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Audit columns the server maintains. Never editable from a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Creator, when the server recorded one.
    pub created_by: Option<String>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// Last modifier, when the server recorded one.
    pub updated_by: Option<String>,
}

impl AuditInfo {
    /// Audit info for a record created and last touched at `at`.
    pub fn created(at: DateTime<Utc>, by: Option<String>) -> Self {
        Self {
            created_at: at,
            created_by: by.clone(),
            updated_at: at,
            updated_by: by,
        }
    }

    /// Bump the modification stamp.
    pub fn touch(&mut self, at: DateTime<Utc>, by: Option<String>) {
        self.updated_at = at;
        self.updated_by = by;
    }
}

/// A server-managed entity displayed by a list/detail screen.
pub trait Resource: Clone + PartialEq + 'static {
    /// Column set the list screen can sort by.
    type SortKey: Copy + PartialEq + Eq + std::fmt::Debug + 'static;

    /// Server-assigned, immutable identifier.
    fn id(&self) -> &str;

    /// User-editable display name. Never empty for a stored resource.
    fn name(&self) -> &str;

    /// Optional free text.
    fn description(&self) -> Option<&str>;

    /// Audit columns.
    fn audit(&self) -> &AuditInfo;

    /// Ordering of two resources on `key`, ascending.
    fn compare(&self, other: &Self, key: Self::SortKey) -> std::cmp::Ordering;

    /// `true` when `needle` (already lowercased) occurs in the name, id or
    /// description, ignoring case.
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name().to_lowercase().contains(needle)
            || self.id().to_lowercase().contains(needle)
            || self
                .description()
                .map(|text| text.to_lowercase().contains(needle))
                .unwrap_or(false)
    }
}

/// Set of foreign ids attached to a resource.
///
/// Duplicates collapse to their first occurrence; display order is
/// first-seen order, equality ignores order.
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct AssociationSet(Vec<String>);

impl AssociationSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.0.iter().any(|existing| *existing == id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        before != self.0.len()
    }

    /// Membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Number of ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no id is attached.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate ids in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Owned ids in first-seen order.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl PartialEq for AssociationSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.0.iter().all(|id| other.contains(id))
    }
}

impl<S: Into<String>> FromIterator<S> for AssociationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<String>> for AssociationSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a AssociationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for AssociationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(ids.unwrap_or_default().into())
    }
}

/// Placeholder for absent optional text.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// `value` when present and non-blank, the placeholder otherwise.
pub fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => EMPTY_PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn association_set_dedupes_and_keeps_first_seen_order() {
        let set: AssociationSet = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.as_slice(), ["b", "a", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn association_set_equality_ignores_order() {
        let left: AssociationSet = ["x", "y"].into_iter().collect();
        let right: AssociationSet = ["y", "x"].into_iter().collect();
        let other: AssociationSet = ["x"].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, other);
    }

    #[test]
    fn association_set_deserializes_null_as_empty() -> Result<(), serde_json::Error> {
        let set: AssociationSet = serde_json::from_str("null")?;
        assert!(set.is_empty());
        let set: AssociationSet = serde_json::from_str(r#"["k1","k1","k2"]"#)?;
        assert_eq!(set.as_slice(), ["k1", "k2"]);
        Ok(())
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = AssociationSet::new();
        assert!(set.insert("gpt-4o"));
        assert!(!set.insert("gpt-4o"));
        assert!(set.remove("gpt-4o"));
        assert!(!set.remove("gpt-4o"));
    }

    #[test]
    fn placeholder_for_missing_text() {
        assert_eq!(display_or_placeholder(None), EMPTY_PLACEHOLDER);
        assert_eq!(display_or_placeholder(Some("  ")), EMPTY_PLACEHOLDER);
        assert_eq!(display_or_placeholder(Some("docs")), "docs");
    }
}
