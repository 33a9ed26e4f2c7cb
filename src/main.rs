use clap::{CommandFactory, Parser};
use colored::*;
use std::fs;
use std::process;

use invoice_audit::api::ApiClient;
use invoice_audit::cli::Args;
use invoice_audit::config::{Config, JsonConfig};
use invoice_audit::error::{AuditError, Result};
use invoice_audit::image::image_data_url;
use invoice_audit::local_tools::{LocalSettings, LocalToolRegistry};
use invoice_audit::orchestrator::{self, OrchestratorContext};
use invoice_audit::ui::format_report;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.config_init {
        let path = JsonConfig::default_init_path();
        match JsonConfig::write_example(&path) {
            Ok(()) => {
                println!("{}", format!("Wrote example config to {}", path.display()).green());
                return;
            }
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red(), e);
                process::exit(1);
            }
        }
    }

    if args.images.is_empty() {
        let _ = Args::command().print_help();
        process::exit(1);
    }

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if let Err(e) = audit(&args, &config).await {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

async fn audit(args: &Args, config: &Config) -> Result<()> {
    let image_urls = args
        .images
        .iter()
        .map(|path| {
            image_data_url(path).map_err(|e| {
                AuditError::Other(format!("Failed to read image {}: {}", path.display(), e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if config.verbose {
        eprintln!(
            "{}",
            format!("[audit] Encoded {} image(s)", image_urls.len()).dimmed()
        );
    }

    let client = ApiClient::new(
        &config.api_endpoint,
        &config.credential,
        config.request_timeout,
        config.verbose,
    )?;
    let registry = LocalToolRegistry::new(LocalSettings {
        contract_lookup_url: config.contract_lookup_url.clone(),
        timeout_secs: config.tool_timeout,
        verbose: config.verbose,
    })?;

    let context = OrchestratorContext {
        config,
        client: &client,
        registry: &registry,
    };
    let mut conversation = orchestrator::initial_conversation(config, &image_urls);
    let report = orchestrator::run(&context, &mut conversation).await?;

    if let Some(ref output) = args.output {
        let images: Vec<String> = args.images.iter().map(|p| p.display().to_string()).collect();
        fs::write(
            output,
            format_report(&report, &config.model, &images, chrono::Local::now()),
        )?;
        println!("{}", format!("Report written to {}", output.display()).green());
    }

    Ok(())
}
