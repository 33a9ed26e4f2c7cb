use serde::{Deserialize, Serialize};

use crate::config::defaults::default_api_version;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub stream_timeout: Option<u64>,
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_version: default_api_version(),
            stream_timeout: None,
            request_timeout: None,
        }
    }
}

/// Turn a configured endpoint into the full Responses API URL.
pub fn responses_url(endpoint: &str, api_version: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.ends_with("/responses") || endpoint.contains("/responses?") {
        endpoint.to_string()
    } else if endpoint.ends_with("/v1") {
        format!("{}/responses", endpoint)
    } else {
        format!("{}/openai/responses?api-version={}", endpoint, api_version)
    }
}
