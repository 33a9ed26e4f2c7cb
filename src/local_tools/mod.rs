mod registry;
mod tools;

pub use registry::{LocalSettings, LocalToolRegistry, ToolKind};
pub use tools::{call_local_tool, format_tools_for_llm, handle_retrieve_contract};
