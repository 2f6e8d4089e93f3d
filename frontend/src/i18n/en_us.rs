#![allow(dead_code, reason = "string table is shared by screens that use subsets of it")]

pub mod common {
    pub const LOADING: &str = "Loading...";
    pub const SEARCH_PLACEHOLDER: &str = "Search by name, ID or description";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE: &str = "Save";
    pub const CREATE: &str = "Create";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const BACK: &str = "Back";
    pub const NEXT: &str = "Next";
    pub const DONE: &str = "Done";
    pub const RETRY: &str = "Retry";
    pub const ACTIONS: &str = "Actions";
    pub const CREATED: &str = "Created";
    pub const CREATED_BY: &str = "Created by";
    pub const UPDATED: &str = "Updated";
    pub const UPDATED_BY: &str = "Updated by";
    pub const ID: &str = "ID";
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
    pub const SORT_ASC: &str = "▲";
    pub const SORT_DESC: &str = "▼";
}

pub mod header {
    pub const BRAND_NAME: &str = "Proxy Console";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const NAV_ACCESS_GROUPS: &str = "Access Groups";
    pub const NAV_AGENTS: &str = "Agents";
    pub const NAV_PLUGINS: &str = "Plugins";
    pub const COMPACT_ROWS: &str = "Compact rows";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
    pub const SUMMARY_TEMPLATE: &str = "Showing {} of {} results";
}

pub mod notification {
    pub const SUCCESS_TITLE: &str = "Success";
    pub const ERROR_TITLE: &str = "Error";
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod modal {
    pub const CLOSE_ARIA: &str = "Close dialog";
}

pub mod delete_modal {
    pub const CONFIRM: &str = "Delete";
    pub const DELETING: &str = "Deleting...";
    pub const IRREVERSIBLE: &str = "This action cannot be undone.";
}

pub mod empty_state {
    pub const NO_MATCHES_TITLE: &str = "No matching results";
    pub const NO_MATCHES_MESSAGE: &str = "Try a different search term.";
    pub const LOAD_FAILED_TITLE: &str = "Could not load data";
}

pub mod association {
    pub const VIEW_ALL_TEMPLATE: &str = "View all ({})";
    pub const SHOW_LESS: &str = "Show less";
    pub const NONE_SELECTED: &str = "Nothing selected";
    pub const FILTER_PLACEHOLDER: &str = "Filter options";
    pub const SELECTED_TEMPLATE: &str = "{} selected";
}

pub mod access_groups {
    pub const TITLE: &str = "Access Groups";
    pub const SUBTITLE: &str =
        "Bundle models, MCP servers and agents, then attach the bundle to keys and teams.";
    pub const CREATE_BUTTON: &str = "Create Access Group";
    pub const EMPTY_TITLE: &str = "No access groups yet";
    pub const EMPTY_MESSAGE: &str = "Create an access group to grant keys and teams a set of resources.";
    pub const COL_RESOURCES: &str = "Resources";
    pub const BADGE_MODELS_TEMPLATE: &str = "{} models";
    pub const BADGE_MCP_TEMPLATE: &str = "{} MCP";
    pub const BADGE_AGENTS_TEMPLATE: &str = "{} agents";
    pub const CREATED_TEMPLATE: &str = "Access group \"{}\" created";
    pub const UPDATED_TEMPLATE: &str = "Access group \"{}\" updated";
    pub const DELETED: &str = "Access group deleted";
    pub const CREATE_FAILED: &str = "Failed to create access group";
    pub const UPDATE_FAILED: &str = "Failed to update access group";
    pub const DELETE_FAILED: &str = "Failed to delete access group";
    pub const DELETE_TITLE: &str = "Delete Access Group";
    pub const DELETE_MESSAGE: &str =
        "Keys and teams attached to this group lose access to its resources.";
    pub const DELETE_INFO_TITLE: &str = "Access group";
}

pub mod access_group_detail {
    pub const BACK: &str = "Back to Access Groups";
    pub const NOT_FOUND_TITLE: &str = "Access group not found";
    pub const NOT_FOUND_MESSAGE: &str = "It may have been deleted, or the link is wrong.";
    pub const EDIT_BUTTON: &str = "Edit Access Group";
    pub const OVERVIEW: &str = "Overview";
    pub const TAB_MODELS: &str = "Models";
    pub const TAB_MCP: &str = "MCP Servers";
    pub const TAB_AGENTS: &str = "Agents";
    pub const NO_MODELS: &str = "No models in this group";
    pub const NO_MCP: &str = "No MCP servers in this group";
    pub const NO_AGENTS: &str = "No agents in this group";
    pub const KEYS_TITLE: &str = "Attached Keys";
    pub const TEAMS_TITLE: &str = "Attached Teams";
    pub const NO_KEYS: &str = "No keys attached";
    pub const NO_TEAMS: &str = "No teams attached";
}

pub mod access_group_form {
    pub const CREATE_TITLE: &str = "Create Access Group";
    pub const EDIT_TITLE: &str = "Edit Access Group";
    pub const TAB_GENERAL: &str = "General";
    pub const TAB_MODELS: &str = "Models";
    pub const TAB_MCP: &str = "MCP Servers";
    pub const TAB_AGENTS: &str = "Agents";
    pub const NAME_LABEL: &str = "Group Name";
    pub const NAME_PLACEHOLDER: &str = "e.g. engineering";
    pub const NAME_LOCKED_HINT: &str = "The group name cannot be changed.";
    pub const DESCRIPTION_LABEL: &str = "Description";
    pub const DESCRIPTION_PLACEHOLDER: &str = "What is this group for?";
    pub const MODELS_HINT: &str = "Models members of this group may call.";
    pub const MCP_HINT: &str = "MCP servers members of this group may use.";
    pub const AGENTS_HINT: &str = "Agents members of this group may invoke.";
    pub const SUBMIT_CREATE: &str = "Create Group";
    pub const SUBMIT_EDIT: &str = "Save Changes";
    pub const SUBMITTING: &str = "Saving...";
}

pub mod agents {
    pub const TITLE: &str = "Agents";
    pub const SUBTITLE: &str = "Register A2A agents and give them keys to call the proxy.";
    pub const ADD_BUTTON: &str = "Add Agent";
    pub const EMPTY_TITLE: &str = "No agents yet";
    pub const EMPTY_MESSAGE: &str = "Add an agent to make it callable through the proxy.";
    pub const COL_URL: &str = "URL";
    pub const COL_STREAMING: &str = "Streaming";
    pub const DELETED: &str = "Agent deleted";
    pub const DELETE_FAILED: &str = "Failed to delete agent";
    pub const DELETE_TITLE: &str = "Delete Agent";
    pub const DELETE_MESSAGE: &str = "Keys assigned to this agent stop working for it.";
    pub const DELETE_INFO_TITLE: &str = "Agent";
}

pub mod agent_wizard {
    pub const TITLE: &str = "Add Agent";
    pub const STEP_DETAILS: &str = "Agent Details";
    pub const STEP_KEY: &str = "Assign Key";
    pub const STEP_DONE: &str = "Done";
    pub const TYPE_LABEL: &str = "Agent Type";
    pub const TYPE_LOADING: &str = "Loading agent types...";
    pub const KEY_CREATE_NEW: &str = "Create a new key";
    pub const KEY_EXISTING: &str = "Use an existing key";
    pub const KEY_SKIP: &str = "Skip for now";
    pub const KEY_NAME_LABEL: &str = "Key Name";
    pub const KEY_MODELS_LABEL: &str = "Models for this key";
    pub const KEY_SEARCH_PLACEHOLDER: &str = "Search keys by alias";
    pub const KEY_SEARCHING: &str = "Searching...";
    pub const KEY_NO_RESULTS: &str = "No keys match";
    pub const SUBMIT: &str = "Create Agent";
    pub const SUBMITTING: &str = "Creating...";
    pub const CREATED_TEMPLATE: &str = "Agent \"{}\" created";
    pub const CREATE_FAILED: &str = "Failed to create agent";
    pub const KEY_FAILED: &str = "Agent created, but the key could not be assigned";
    pub const DONE_KEY_CREATED: &str = "New key (copy it now, it is shown only once):";
    pub const DONE_KEY_ASSIGNED_TEMPLATE: &str = "Assigned key: {}";
    pub const DONE_NO_KEY: &str = "No key assigned.";
}

pub mod agent_detail {
    pub const BACK: &str = "Back to Agents";
    pub const NOT_FOUND_TITLE: &str = "Agent not found";
    pub const NOT_FOUND_MESSAGE: &str = "It may have been deleted, or the link is wrong.";
    pub const CARD_TITLE: &str = "Agent Card";
    pub const PARAMS_TITLE: &str = "LiteLLM Params";
    pub const NO_PARAMS: &str = "No parameters";
    pub const URL_LABEL: &str = "URL";
    pub const VERSION_LABEL: &str = "Version";
    pub const PROTOCOL_LABEL: &str = "Protocol";
    pub const STREAMING_LABEL: &str = "Streaming";
    pub const MODES_LABEL: &str = "Input / Output";
    pub const SKILLS_LABEL: &str = "Skills";
    pub const TYPE_LABEL: &str = "Type";
    pub const UPDATED: &str = "Agent updated";
    pub const UPDATE_FAILED: &str = "Failed to update agent";
}

pub mod plugins {
    pub const TITLE: &str = "Plugins";
    pub const SUBTITLE: &str = "Marketplace plugins offered to coding agents.";
    pub const ADD_BUTTON: &str = "Add Plugin";
    pub const EMPTY_TITLE: &str = "No plugins yet";
    pub const EMPTY_MESSAGE: &str = "Add a plugin from GitHub or a git URL.";
    pub const COL_VERSION: &str = "Version";
    pub const COL_SOURCE: &str = "Source";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_ENABLED: &str = "Enabled";
    pub const CREATED_TEMPLATE: &str = "Plugin \"{}\" added";
    pub const CREATE_FAILED: &str = "Failed to add plugin";
    pub const ENABLED_TEMPLATE: &str = "Plugin \"{}\" enabled";
    pub const DISABLED_TEMPLATE: &str = "Plugin \"{}\" disabled";
    pub const TOGGLE_FAILED: &str = "Failed to change plugin status";
    pub const DELETED: &str = "Plugin deleted";
    pub const DELETE_FAILED: &str = "Failed to delete plugin";
    pub const DELETE_TITLE: &str = "Delete Plugin";
    pub const DELETE_MESSAGE: &str = "The plugin is removed from the marketplace.";
    pub const DELETE_INFO_TITLE: &str = "Plugin";
}

pub mod plugin_form {
    pub const TITLE: &str = "Add Plugin";
    pub const NAME_LABEL: &str = "Plugin Name";
    pub const NAME_PLACEHOLDER: &str = "my-plugin";
    pub const SOURCE_LABEL: &str = "Source Type";
    pub const SOURCE_GITHUB: &str = "GitHub";
    pub const SOURCE_URL: &str = "Git URL";
    pub const REPO_LABEL: &str = "Repository";
    pub const REPO_PLACEHOLDER: &str = "owner/repo";
    pub const URL_LABEL: &str = "Git URL";
    pub const URL_PLACEHOLDER: &str = "https://github.com/owner/repo.git";
    pub const VERSION_LABEL: &str = "Version (optional)";
    pub const DESCRIPTION_LABEL: &str = "Description (optional)";
    pub const CATEGORY_LABEL: &str = "Category (optional)";
    pub const CATEGORY_NONE: &str = "No category";
    pub const KEYWORDS_LABEL: &str = "Keywords (optional, comma separated)";
    pub const AUTHOR_NAME_LABEL: &str = "Author Name (optional)";
    pub const AUTHOR_EMAIL_LABEL: &str = "Author Email (optional)";
    pub const HOMEPAGE_LABEL: &str = "Homepage (optional)";
    pub const SUBMIT: &str = "Add Plugin";
    pub const SUBMITTING: &str = "Adding...";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const MESSAGE: &str = "The page you are looking for does not exist.";
    pub const HOME_LINK: &str = "Go to Access Groups";
}
