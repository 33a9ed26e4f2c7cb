use serde::{Deserialize, Serialize};

use crate::models::{FunctionCall, InputItem, ToolDeclaration};

#[derive(Serialize, Debug, Clone)]
pub struct RequestBody {
    pub model: String,
    pub instructions: String,
    pub input: Vec<InputItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OutputText {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(default)]
    pub text: String,
}

/// An item of the `output` array of a model response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    FunctionCall(FunctionCall),
    Message {
        #[serde(default)]
        content: Vec<OutputText>,
    },
    FileSearchCall {
        #[serde(default)]
        queries: Vec<String>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// Events of a streamed response that the client acts on.
#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
pub enum StreamEvent {
    #[serde(rename = "response.output_text.delta")]
    OutputTextDelta { delta: String },
    #[serde(rename = "response.completed")]
    Completed { response: ApiResponse },
    #[serde(rename = "response.failed")]
    Failed { response: serde_json::Value },
    #[serde(rename = "error")]
    Error {
        #[serde(default)]
        message: String,
    },
    #[serde(other)]
    Other,
}
