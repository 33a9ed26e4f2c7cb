mod api;
mod defaults;
mod tools;
mod validation;

use crate::api::Credential;
use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::{responses_url, ApiConfig};
pub use defaults::{DEFAULT_INSTRUCTIONS, DEFAULT_USER_PROMPT};
pub use tools::ToolsConfig;
pub use validation::expand_with;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub deployment: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OrchestratorConfig {
    #[serde(default)]
    pub require_tool_call: Option<bool>,
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_endpoint: String,
    pub credential: Credential,
    pub model: String,
    pub instructions: String,
    pub user_prompt: String,
    pub vector_store_id: Option<String>,
    pub max_num_results: u32,
    pub image_detail: String,
    pub contract_lookup_url: String,
    pub tool_timeout: u64,
    pub stream: bool,
    pub stream_timeout: u64,
    pub request_timeout: u64,
    pub require_tool_call: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let json_config = JsonConfig::load().map_err(|e| format!("{:#}", e))?;
        Self::from_sources(args, json_config, |name| env::var(name).ok())
    }

    /// Resolve every setting: CLI args > environment > config file > default.
    pub fn from_sources<F>(args: &Args, json_config: JsonConfig, env_lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expand = |value: String| expand_with(&value, &env_lookup);

        let credential = Credential::from_env_lookup(&env_lookup)
            .ok_or("Neither AZURE_OPENAI_API_KEY nor AZURE_OPENAI_AD_TOKEN is set")?;

        let endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env_lookup("AZURE_OPENAI_ENDPOINT"))
            .or(json_config.api.endpoint.clone().map(expand))
            .ok_or("No endpoint configured (set AZURE_OPENAI_ENDPOINT or api.endpoint)")?;

        let api_version = env_lookup("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|| json_config.api.api_version.clone());
        let api_endpoint = responses_url(&endpoint, &api_version);

        let model = args
            .model
            .clone()
            .or_else(|| env_lookup("AZURE_OPENAI_DEPLOYMENT"))
            .or(json_config.model.deployment.clone())
            .unwrap_or_else(defaults::default_model);

        let instructions = match &args.instructions_file {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                format!("Failed to read instructions file {}: {}", path.display(), e)
            })?,
            None => json_config
                .model
                .instructions
                .clone()
                .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string()),
        };

        let user_prompt = args
            .prompt
            .clone()
            .or(json_config.model.user_prompt.clone())
            .unwrap_or_else(|| DEFAULT_USER_PROMPT.to_string());

        let vector_store_id = args
            .vector_store
            .clone()
            .or_else(|| env_lookup("AZURE_VECTOR_STORE_ID"))
            .or(json_config.tools.vector_store_id.clone().map(expand))
            .filter(|id| !id.is_empty());

        let contract_lookup_url = env_lookup("LOGICAPP_URL")
            .or(json_config.tools.contract_lookup_url.clone().map(expand))
            .ok_or("No contract lookup URL configured (set LOGICAPP_URL or tools.contract_lookup_url)")?;

        let verbose = args.verbose
            || env_lookup("AUDIT_VERBOSE")
                .map(|v| is_truthy(&v))
                .or(json_config.session.verbose)
                .unwrap_or(false);

        let require_tool_call = args.require_tool_call
            || json_config.orchestrator.require_tool_call.unwrap_or(false);

        Ok(Config {
            api_endpoint,
            credential,
            model,
            instructions,
            user_prompt,
            vector_store_id,
            max_num_results: json_config.tools.max_num_results,
            image_detail: json_config.tools.image_detail.clone(),
            contract_lookup_url,
            tool_timeout: json_config.tools.timeout_secs,
            stream: args.stream,
            stream_timeout: json_config
                .api
                .stream_timeout
                .unwrap_or_else(defaults::default_stream_timeout),
            request_timeout: json_config
                .api
                .request_timeout
                .unwrap_or_else(defaults::default_request_timeout),
            require_tool_call,
            verbose,
        })
    }
}

impl JsonConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(JsonConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".invoice-audit.yaml"),
            PathBuf::from(".invoice-audit.yml"),
            PathBuf::from(".invoice-audit.json"),
        ];

        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("config.yaml"));
            paths.push(config_dir.join("config.yml"));
            paths.push(config_dir.join("config.json"));
        }

        paths
    }

    fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("invoice-audit"))
    }

    /// Write an example YAML config, refusing to overwrite an existing one.
    pub fn write_example(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let example = JsonConfig {
            api: ApiConfig {
                endpoint: Some("https://${AZURE_RESOURCE}.openai.azure.com".to_string()),
                ..ApiConfig::default()
            },
            model: ModelConfig {
                deployment: Some(defaults::default_model()),
                ..ModelConfig::default()
            },
            tools: ToolsConfig {
                vector_store_id: Some("${AZURE_VECTOR_STORE_ID}".to_string()),
                contract_lookup_url: Some("${LOGICAPP_URL}".to_string()),
                ..ToolsConfig::default()
            },
            ..JsonConfig::default()
        };

        fs::write(path, serde_yaml::to_string(&example)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn default_init_path() -> PathBuf {
        Self::user_config_dir()
            .map(|dir| dir.join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from(".invoice-audit.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn base_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("AZURE_OPENAI_ENDPOINT", "https://aoai.openai.azure.com"),
            ("AZURE_OPENAI_API_KEY", "key"),
            ("LOGICAPP_URL", "https://logic.example/contract"),
        ]
    }

    #[test]
    fn test_defaults_from_env() {
        let config =
            Config::from_sources(&Args::default(), JsonConfig::default(), env_of(&base_env()))
                .unwrap();

        assert_eq!(
            config.api_endpoint,
            "https://aoai.openai.azure.com/openai/responses?api-version=2025-03-01-preview"
        );
        assert_eq!(config.credential, Credential::ApiKey("key".to_string()));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_num_results, 20);
        assert_eq!(config.image_detail, "high");
        assert_eq!(config.vector_store_id, None);
        assert_eq!(config.instructions, DEFAULT_INSTRUCTIONS);
        assert!(!config.require_tool_call);
    }

    #[test]
    fn test_bearer_token_used_without_api_key() {
        let env = env_of(&[
            ("AZURE_OPENAI_ENDPOINT", "https://aoai.openai.azure.com"),
            ("AZURE_OPENAI_AD_TOKEN", "tok"),
            ("LOGICAPP_URL", "https://logic.example/contract"),
        ]);
        let config = Config::from_sources(&Args::default(), JsonConfig::default(), env).unwrap();
        assert_eq!(config.credential, Credential::BearerToken("tok".to_string()));
    }

    #[test]
    fn test_reads_uppercase_env_names_only() {
        let env = env_of(&[
            ("AZURE_OPENAI_ENDPOINT", "https://aoai.openai.azure.com"),
            ("AZURE_OPENAI_API_KEY", "key"),
            ("AZURE_OPENAI_API_VERSION", "2025-04-01-preview"),
            ("AZURE_OPENAI_DEPLOYMENT", "gpt-4.1"),
            ("AZURE_VECTOR_STORE_ID", "vs_contracts"),
            ("LOGICAPP_URL", "https://logic.example/contract"),
            ("azure_deployment_name", "ignored"),
            ("azure_vector_store_id", "ignored"),
        ]);
        let config = Config::from_sources(&Args::default(), JsonConfig::default(), env).unwrap();
        assert_eq!(
            config.api_endpoint,
            "https://aoai.openai.azure.com/openai/responses?api-version=2025-04-01-preview"
        );
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.vector_store_id.as_deref(), Some("vs_contracts"));
        assert_eq!(config.contract_lookup_url, "https://logic.example/contract");

        let lowercase = env_of(&[
            ("azure_endpoint", "https://aoai.openai.azure.com"),
            ("azure_api_key", "key"),
            ("logicapp_url", "https://logic.example/contract"),
        ]);
        assert!(Config::from_sources(&Args::default(), JsonConfig::default(), lowercase).is_err());
    }

    #[test]
    fn test_missing_credential_is_error() {
        let env = env_of(&[
            ("AZURE_OPENAI_ENDPOINT", "https://aoai.openai.azure.com"),
            ("LOGICAPP_URL", "https://logic.example/contract"),
        ]);
        let err = Config::from_sources(&Args::default(), JsonConfig::default(), env).unwrap_err();
        assert!(err.contains("AZURE_OPENAI_API_KEY"));
    }

    #[test]
    fn test_cli_overrides_env_and_file() {
        let mut env = base_env();
        env.push(("AZURE_OPENAI_DEPLOYMENT", "env-model"));
        env.push(("AZURE_VECTOR_STORE_ID", "vs_env"));

        let mut json_config = JsonConfig::default();
        json_config.model.deployment = Some("file-model".to_string());
        json_config.orchestrator.require_tool_call = Some(true);

        let args = Args {
            model: Some("cli-model".to_string()),
            vector_store: Some("vs_cli".to_string()),
            ..Args::default()
        };

        let config = Config::from_sources(&args, json_config, env_of(&env)).unwrap();
        assert_eq!(config.model, "cli-model");
        assert_eq!(config.vector_store_id.as_deref(), Some("vs_cli"));
        assert!(config.require_tool_call);
    }

    #[test]
    fn test_file_values_expand_env() {
        let env = env_of(&[
            ("AZURE_OPENAI_API_KEY", "key"),
            ("RESOURCE", "acme"),
            ("STORE", "vs_42"),
        ]);
        let yaml = r#"
api:
  endpoint: "https://${RESOURCE}.openai.azure.com"
tools:
  vector_store_id: "${STORE}"
  contract_lookup_url: "https://logic.example/${RESOURCE}"
  max_num_results: 5
"#;
        let json_config: JsonConfig = serde_yaml::from_str(yaml).unwrap();
        let config = Config::from_sources(&Args::default(), json_config, env).unwrap();

        assert!(config.api_endpoint.starts_with("https://acme.openai.azure.com/openai/responses"));
        assert_eq!(config.vector_store_id.as_deref(), Some("vs_42"));
        assert_eq!(config.contract_lookup_url, "https://logic.example/acme");
        assert_eq!(config.max_num_results, 5);
    }
}
