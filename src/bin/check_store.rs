use colored::*;
use std::env;

use invoice_audit::api::response::{file_search_queries, output_text};
use invoice_audit::api::{ApiClient, ApiResponse, Credential, RequestBody};
use invoice_audit::config::responses_url;
use invoice_audit::models::{ContentPart, InputItem, Role, ToolDeclaration};

fn required_env(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        eprintln!("{}", format!("Error: {} environment variable not set", name).red());
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <question> [--raw]", args[0]);
        std::process::exit(1);
    }

    let question = &args[1];
    let show_raw = args.len() > 2 && args[2] == "--raw";

    let endpoint = required_env("AZURE_OPENAI_ENDPOINT");
    let vector_store_id = required_env("AZURE_VECTOR_STORE_ID");
    let api_version =
        env::var("AZURE_OPENAI_API_VERSION").unwrap_or_else(|_| "2025-03-01-preview".to_string());
    let model = env::var("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|_| "gpt-4o".to_string());
    let credential = Credential::from_env_lookup(|name| env::var(name).ok()).unwrap_or_else(|| {
        eprintln!(
            "{}",
            "Error: neither AZURE_OPENAI_API_KEY nor AZURE_OPENAI_AD_TOKEN is set".red()
        );
        std::process::exit(1);
    });

    let url = responses_url(&endpoint, &api_version);
    println!("{}", format!("Endpoint: {}", url).green());
    println!("{}", format!("Vector store: {}", vector_store_id).green());
    println!("{}", format!("Question: {}", question).cyan());
    println!("{}", "-".repeat(80).dimmed());

    let request_body = RequestBody {
        model,
        instructions: "Answer using only the documents found by file search.".to_string(),
        input: vec![InputItem::Message {
            role: Role::User,
            content: vec![ContentPart::InputText {
                text: question.clone(),
            }],
        }],
        tools: vec![ToolDeclaration::FileSearch {
            vector_store_ids: vec![vector_store_id],
            max_num_results: 20,
        }],
        tool_choice: None,
        parallel_tool_calls: None,
        stream: false,
    };

    println!("{}", "Request payload:".bold());
    println!("{}", serde_json::to_string_pretty(&request_body)?);
    println!("{}", "-".repeat(80).dimmed());

    let client = ApiClient::new(&url, &credential, 300, false)?;
    let response = client.send(&request_body).await?;
    let response_text = response.text().await?;

    if show_raw {
        let raw: serde_json::Value = serde_json::from_str(&response_text)?;
        println!("{}", "Raw response:".bold());
        println!("{}", serde_json::to_string_pretty(&raw)?);
        println!("{}", "-".repeat(80).dimmed());
    }

    let parsed: ApiResponse = serde_json::from_str(&response_text)?;
    for query in file_search_queries(&parsed) {
        println!("{}: {}", "Search query".yellow(), query);
    }
    println!("{}", "Answer:".bold());
    println!("{}", output_text(&parsed));

    Ok(())
}
