mod detail;
mod form_modal;
mod list;

pub use detail::AccessGroupDetailPage;
pub use list::AccessGroupsPage;
