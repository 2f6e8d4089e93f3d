mod add_form;
mod list;

pub use list::PluginsPage;
