use invoice_audit::api::response::{file_search_queries, first_function_call, output_text};
use invoice_audit::api::ApiResponse;
use serde_json::json;

fn parse(value: serde_json::Value) -> ApiResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_first_function_call_present() {
    let response = parse(json!({
        "id": "resp_1",
        "status": "completed",
        "output": [{
            "type": "function_call",
            "id": "fc_1",
            "call_id": "call_123",
            "name": "retrieve_contract",
            "arguments": "{\"contract_id\":\"C1\",\"supplier_id\":\"S1\"}",
            "status": "completed"
        }]
    }));

    let call = first_function_call(&response).unwrap();
    assert_eq!(call.call_id, "call_123");
    assert_eq!(call.name, "retrieve_contract");
    assert_eq!(call.id.as_deref(), Some("fc_1"));
}

#[test]
fn test_function_call_not_first_is_ignored() {
    let response = parse(json!({
        "output": [
            {"type": "file_search_call", "id": "fs_1", "queries": ["price rules"], "status": "completed"},
            {"type": "function_call", "call_id": "call_1", "name": "retrieve_contract", "arguments": "{}"}
        ]
    }));

    assert!(first_function_call(&response).is_none());
    assert_eq!(file_search_queries(&response), vec!["price rules".to_string()]);
}

#[test]
fn test_first_function_call_empty_output() {
    let response = parse(json!({"output": []}));
    assert!(first_function_call(&response).is_none());
    assert_eq!(output_text(&response), "");
}

#[test]
fn test_output_text_joins_message_parts() {
    let response = parse(json!({
        "output": [
            {"type": "reasoning", "id": "rs_1", "summary": []},
            {
                "type": "message",
                "id": "msg_1",
                "role": "assistant",
                "content": [
                    {"type": "output_text", "text": "Anomaly 1: ", "annotations": []},
                    {"type": "refusal", "refusal": "n/a"},
                    {"type": "output_text", "text": "unit price above contract.", "annotations": []}
                ]
            }
        ]
    }));

    assert_eq!(output_text(&response), "Anomaly 1: unit price above contract.");
}
