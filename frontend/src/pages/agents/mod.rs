mod detail;
mod list;
mod wizard;

pub use detail::AgentDetailPage;
pub use list::AgentsPage;
