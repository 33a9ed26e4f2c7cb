use invoice_audit::config::JsonConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
api:
  endpoint: https://aoai.openai.azure.com
  stream_timeout: 60
model:
  deployment: gpt-4o-mini
tools:
  vector_store_id: vs_rules
orchestrator:
  require_tool_call: true
"#,
    )
    .unwrap();

    let config = JsonConfig::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint.as_deref(), Some("https://aoai.openai.azure.com"));
    assert_eq!(config.api.api_version, "2025-03-01-preview");
    assert_eq!(config.api.stream_timeout, Some(60));
    assert_eq!(config.model.deployment.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(config.tools.vector_store_id.as_deref(), Some("vs_rules"));
    assert_eq!(config.tools.max_num_results, 20);
    assert_eq!(config.orchestrator.require_tool_call, Some(true));
}

#[test]
fn test_load_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".invoice-audit.json");
    fs::write(&path, r#"{"tools": {"max_num_results": 5, "image_detail": "low"}}"#).unwrap();

    let config = JsonConfig::load_from(&path).unwrap();
    assert_eq!(config.tools.max_num_results, 5);
    assert_eq!(config.tools.image_detail, "low");
}

#[test]
fn test_invalid_yaml_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yml");
    fs::write(&path, "api: [unclosed").unwrap();

    let err = JsonConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.yml"));
}

#[test]
fn test_write_example_round_trip_and_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.yaml");

    JsonConfig::write_example(&path).unwrap();
    let config = JsonConfig::load_from(&path).unwrap();
    assert_eq!(config.tools.contract_lookup_url.as_deref(), Some("${LOGICAPP_URL}"));

    assert!(JsonConfig::write_example(&path).is_err());
}
