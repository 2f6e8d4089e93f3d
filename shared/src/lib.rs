//! Domain model and screen logic of the proxy admin console.
//!
//! Everything here is plain Rust with no browser dependency so it can be
//! unit tested natively; the `frontend` crate renders it with Yew.

pub mod access_group;
pub mod agent;
pub mod error;
pub mod list_view;
pub mod mock_store;
pub mod pagination;
pub mod plugin;
pub mod prefs;
pub mod resource;
pub mod screen;
pub mod seq;
pub mod validation;

pub use access_group::{AccessGroup, AccessGroupResponse};
pub use agent::Agent;
pub use error::{ApiError, FieldErrors, ValidationError};
pub use plugin::Plugin;
pub use resource::{AssociationSet, AuditInfo, Resource};
