use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::{AuditError, Result};
use crate::models::ToolDeclaration;

#[derive(Debug, Clone)]
pub struct LocalSettings {
    pub contract_lookup_url: String,
    pub timeout_secs: u64,
    pub verbose: bool,
}

/// Every function the model can ask this process to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    RetrieveContract,
}

impl ToolKind {
    pub const ALL: [ToolKind; 1] = [ToolKind::RetrieveContract];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::RetrieveContract => "retrieve_contract",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::RetrieveContract => {
                "fetch contract details for the given contract_id and supplier_id"
            }
        }
    }

    pub fn parameters(self) -> Value {
        match self {
            ToolKind::RetrieveContract => json!({
                "type": "object",
                "properties": {
                    "contract_id": {
                        "type": "string",
                        "description": "The contract id registered for the Supplier in the System"
                    },
                    "supplier_id": {
                        "type": "string",
                        "description": "The Supplier ID registered in the System"
                    }
                },
                "required": ["contract_id", "supplier_id"],
                "additionalProperties": false
            }),
        }
    }

    pub fn declaration(self) -> ToolDeclaration {
        ToolDeclaration::Function {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

pub struct LocalToolRegistry {
    tools: Vec<ToolKind>,
    settings: LocalSettings,
    http: reqwest::Client,
}

impl LocalToolRegistry {
    pub fn new(settings: LocalSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            tools: ToolKind::ALL.to_vec(),
            settings,
            http,
        })
    }

    pub fn get(&self, name: &str) -> Option<ToolKind> {
        ToolKind::from_name(name).filter(|kind| self.tools.contains(kind))
    }

    pub fn list(&self) -> &[ToolKind] {
        &self.tools
    }

    pub fn settings(&self) -> &LocalSettings {
        &self.settings
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fail unless every declared function tool has a local handler.
    pub fn ensure_declared(&self, declarations: &[ToolDeclaration]) -> Result<()> {
        for name in declarations.iter().filter_map(|d| d.function_name()) {
            if self.get(name).is_none() {
                return Err(AuditError::UnknownTool(name.to_string()));
            }
        }
        Ok(())
    }

    pub fn validate_arguments(&self, kind: ToolKind, arguments: &Value) -> std::result::Result<(), String> {
        let schema = kind.parameters();
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema)
            .map_err(|e| format!("Invalid tool schema: {}", e))?;

        if let Err(errors) = compiled.validate(arguments) {
            let error_messages: Vec<String> = errors
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect();
            return Err(error_messages.join("; "));
        }

        Ok(())
    }
}
