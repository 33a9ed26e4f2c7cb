use serde::{Deserialize, Serialize};

use crate::config::defaults::{default_image_detail, default_max_num_results, default_tool_timeout};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub vector_store_id: Option<String>,
    #[serde(default = "default_max_num_results")]
    pub max_num_results: u32,
    #[serde(default)]
    pub contract_lookup_url: Option<String>,
    #[serde(default = "default_tool_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_image_detail")]
    pub image_detail: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            vector_store_id: None,
            max_num_results: default_max_num_results(),
            contract_lookup_url: None,
            timeout_secs: default_tool_timeout(),
            image_detail: default_image_detail(),
        }
    }
}
