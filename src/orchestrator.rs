use crate::api::response::{file_search_queries, first_function_call, output_text};
use crate::api::{process_streaming_response, ApiClient, RequestBody};
use crate::config::Config;
use crate::error::{AuditError, Result};
use crate::local_tools::{call_local_tool, format_tools_for_llm, LocalToolRegistry};
use crate::models::{FunctionCall, InputItem, ToolDeclaration};
use crate::ui::{display_content, display_tool_call, display_tool_result};
use colored::*;
use tokio::time::{timeout, Duration};

pub struct OrchestratorContext<'a> {
    pub config: &'a Config,
    pub client: &'a ApiClient,
    pub registry: &'a LocalToolRegistry,
}

/// Hosted file search (when a vector store is configured) plus every local function.
pub fn tool_declarations(config: &Config, registry: &LocalToolRegistry) -> Vec<ToolDeclaration> {
    let mut tools = Vec::new();
    if let Some(ref vector_store_id) = config.vector_store_id {
        tools.push(ToolDeclaration::FileSearch {
            vector_store_ids: vec![vector_store_id.clone()],
            max_num_results: config.max_num_results,
        });
    }
    tools.extend(format_tools_for_llm(registry));
    tools
}

pub fn initial_conversation(config: &Config, image_urls: &[String]) -> Vec<InputItem> {
    vec![InputItem::user_with_images(
        &config.user_prompt,
        image_urls,
        &config.image_detail,
    )]
}

/// Run the two-step exchange and return the final report text.
///
/// The first request lets the model pick a tool. If its first output item is
/// a function call, the call and its result are appended to `conversation`
/// before the second request is sent.
pub async fn run(context: &OrchestratorContext<'_>, conversation: &mut Vec<InputItem>) -> Result<String> {
    let config = context.config;
    let tools = tool_declarations(config, context.registry);
    context.registry.ensure_declared(&tools)?;

    if config.verbose {
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t.function_name().unwrap_or("file_search"))
            .collect();
        eprintln!(
            "{}",
            format!("[audit] Model: {}, tools: {}", config.model, names.join(", ")).dimmed()
        );
    }

    let first_request = RequestBody {
        model: config.model.clone(),
        instructions: config.instructions.clone(),
        input: conversation.clone(),
        tools: tools.clone(),
        tool_choice: Some("auto".to_string()),
        parallel_tool_calls: Some(false),
        stream: false,
    };
    let response = context.client.create_response(&first_request).await?;

    if config.verbose {
        for query in file_search_queries(&response) {
            eprintln!("{}", format!("[audit] File search query: {}", query).dimmed());
        }
    }

    let Some(call) = first_function_call(&response).cloned() else {
        if config.require_tool_call {
            return Err(AuditError::NoToolCall);
        }
        eprintln!(
            "{}",
            "Warning: model did not request a contract lookup; using its answer as the report"
                .yellow()
        );
        let content = output_text(&response);
        display_content(&content);
        return Ok(content);
    };

    let result = execute_tool_call(context, &call).await?;
    conversation.push(InputItem::FunctionCall(call.clone()));
    conversation.push(InputItem::call_output(&call.call_id, result));

    let final_request = RequestBody {
        model: config.model.clone(),
        instructions: config.instructions.clone(),
        input: conversation.clone(),
        tools,
        tool_choice: None,
        parallel_tool_calls: None,
        stream: config.stream,
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!(
                "[audit] Making follow-up request with tool result (stream={})",
                config.stream
            )
            .dimmed()
        );
    }

    if config.stream {
        // headers count as the first chunk for the stream timeout
        let response = timeout(
            Duration::from_secs(config.stream_timeout),
            context.client.send(&final_request),
        )
        .await
        .map_err(|_| AuditError::Timeout)??;
        process_streaming_response(response, config.stream_timeout, config.verbose).await
    } else {
        let response = context.client.create_response(&final_request).await?;
        let content = output_text(&response);
        display_content(&content);
        Ok(content)
    }
}

async fn execute_tool_call(context: &OrchestratorContext<'_>, call: &FunctionCall) -> Result<String> {
    if context.config.verbose {
        eprintln!(
            "{}",
            format!(
                "[tools] Selected tool: '{}' (call_id={})",
                call.name, call.call_id
            )
            .dimmed()
        );
    }

    display_tool_call(&call.name, &call.arguments);
    let result = call_local_tool(context.registry, &call.name, &call.arguments).await?;
    display_tool_result(&call.name, &result);

    Ok(result)
}
