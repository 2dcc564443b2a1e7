//! Data models for Gudang

pub mod project;
pub mod tool;
pub mod tool_instance;
pub mod user;

// Re-export commonly used types
pub use project::Project;
pub use tool::{Tool, ToolCondition};
pub use tool_instance::{ToolInstance, ToolInstanceDetails};
pub use user::User;
