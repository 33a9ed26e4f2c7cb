use crate::api::models::{ApiResponse, OutputItem};
use crate::models::FunctionCall;

/// The function call the model asked for, if it is the first output item.
pub fn first_function_call(response: &ApiResponse) -> Option<&FunctionCall> {
    match response.output.first() {
        Some(OutputItem::FunctionCall(call)) => Some(call),
        _ => None,
    }
}

/// Concatenate every `output_text` part of every message item.
pub fn output_text(response: &ApiResponse) -> String {
    let mut text = String::new();
    for item in &response.output {
        if let OutputItem::Message { content } = item {
            for part in content {
                if part.part_type == "output_text" {
                    text.push_str(&part.text);
                }
            }
        }
    }
    text
}

/// Queries the hosted file search ran, in output order.
pub fn file_search_queries(response: &ApiResponse) -> Vec<String> {
    response
        .output
        .iter()
        .filter_map(|item| match item {
            OutputItem::FileSearchCall { queries } => Some(queries.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}
