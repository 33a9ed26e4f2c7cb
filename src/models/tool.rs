use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool the model may use, as sent in the `tools` array of a request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolDeclaration {
    FileSearch {
        vector_store_ids: Vec<String>,
        max_num_results: u32,
    },
    Function {
        name: String,
        description: String,
        parameters: Value,
    },
}

impl ToolDeclaration {
    /// Name of a function tool; hosted tools have none.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            ToolDeclaration::Function { name, .. } => Some(name),
            ToolDeclaration::FileSearch { .. } => None,
        }
    }
}

/// A function invocation requested by the model.
///
/// The whole item is echoed back into the conversation, so the optional
/// `id` and `status` fields survive a round trip untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub call_id: String,
    pub name: String,
    pub arguments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionCallOutput {
    pub call_id: String,
    pub output: String,
}
