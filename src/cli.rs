use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "invoice-audit")]
#[command(
    about = "Detect procure-to-pay anomalies in invoice images with a hosted model",
    long_about = None
)]
pub struct Args {
    #[arg(short = 'p', long = "prompt", help = "Override the user prompt")]
    pub prompt: Option<String>,

    #[arg(
        long = "instructions-file",
        help = "Read the model instructions from a file"
    )]
    pub instructions_file: Option<PathBuf>,

    #[arg(long = "model", help = "Deployment or model name")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Model endpoint (e.g., https://my-resource.openai.azure.com)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(long = "vector-store", help = "Vector store holding the business rules")]
    pub vector_store: Option<String>,

    #[arg(long = "stream", help = "Stream the final report as it is generated")]
    pub stream: bool,

    #[arg(
        long = "require-tool-call",
        help = "Fail if the model answers without looking up the contract"
    )]
    pub require_tool_call: bool,

    #[arg(short = 'o', long = "output", help = "Also write the report to a file")]
    pub output: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output to stderr")]
    pub verbose: bool,

    #[arg(
        long = "config-init",
        help = "Write an example config file and exit"
    )]
    pub config_init: bool,

    #[arg(help = "Invoice image files")]
    pub images: Vec<PathBuf>,
}
