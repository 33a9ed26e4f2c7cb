use colored::*;
use serde_json::{json, Value};

use super::registry::{LocalToolRegistry, ToolKind};
use crate::error::{AuditError, Result};
use crate::models::ToolDeclaration;

pub fn format_tools_for_llm(registry: &LocalToolRegistry) -> Vec<ToolDeclaration> {
    registry.list().iter().map(|kind| kind.declaration()).collect()
}

/// Resolve, parse, validate and run one function call from the model.
pub async fn call_local_tool(
    registry: &LocalToolRegistry,
    tool_name: &str,
    arguments: &str,
) -> Result<String> {
    let kind = registry
        .get(tool_name)
        .ok_or_else(|| AuditError::UnknownTool(tool_name.to_string()))?;

    let arguments: Value = serde_json::from_str(arguments)?;

    registry
        .validate_arguments(kind, &arguments)
        .map_err(|e| AuditError::ToolError(format!("{}: {}", tool_name, e)))?;

    let result = match kind {
        ToolKind::RetrieveContract => handle_retrieve_contract(registry, &arguments).await,
    };

    result.map_err(|e| AuditError::ToolError(format!("{}: {}", tool_name, e)))
}

// Tool handlers

pub async fn handle_retrieve_contract(
    registry: &LocalToolRegistry,
    args: &Value,
) -> std::result::Result<String, String> {
    let contract_id = args
        .get("contract_id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing required argument: contract_id".to_string())?;
    let supplier_id = args
        .get("supplier_id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing required argument: supplier_id".to_string())?;

    let settings = registry.settings();
    if settings.verbose {
        eprintln!(
            "{}",
            format!(
                "[tools] POST {} (contract_id={}, supplier_id={})",
                settings.contract_lookup_url, contract_id, supplier_id
            )
            .dimmed()
        );
    }

    let response = registry
        .http()
        .post(&settings.contract_lookup_url)
        .json(&json!({
            "contract_id": contract_id,
            "supplier_id": supplier_id,
        }))
        .send()
        .await
        .map_err(|e| format!("Contract lookup request failed: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read contract lookup response: {}", e))?;

    if !status.is_success() {
        return Err(format!(
            "Contract lookup returned status {}: {}",
            status.as_u16(),
            body
        ));
    }

    if settings.verbose {
        eprintln!(
            "{}",
            format!("[tools] Contract lookup returned {} bytes", body.len()).dimmed()
        );
    }

    Ok(body)
}
