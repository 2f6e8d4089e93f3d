// Reusable components live here.

pub mod association_preview;
pub mod delete_resource_modal;
pub mod empty_state;
pub mod header;
pub mod key_picker;
pub mod loading_spinner;
pub mod modal;
pub mod multi_select;
pub mod notification;
pub mod pagination;
pub mod resource_table;
pub mod theme_toggle;
