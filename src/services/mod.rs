// Service exports
pub mod agent;
pub mod catalog;
pub mod sessions;

pub use agent::{AgentError, AgentIds, AgentInvoker, HttpAgentClient};
pub use catalog::Catalog;
pub use sessions::SessionStore;
