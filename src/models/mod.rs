mod conversation;
mod tool;

pub use conversation::{ContentPart, InputItem, Role};
pub use tool::{FunctionCall, FunctionCallOutput, ToolDeclaration};
