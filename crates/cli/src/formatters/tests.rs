use std::collections::BTreeMap;

use kiln_config::{ConfigLoader, ConfigValues};

use super::*;

fn sample() -> ResolvedConfig {
    let mut values = ConfigValues::new();
    values.entry("core".to_string()).or_default().extend([
        ("threads".to_string(), "8".to_string()),
        ("mode".to_string(), String::new()),
    ]);
    values
        .entry("cache".to_string())
        .or_default()
        .insert("dir".to_string(), "/var/cache/kiln".to_string());
    ConfigLoader::from_values(values)
}

#[test]
fn test_text_config_is_sorted_ini() {
    let output = TextFormatter.format_config(&sample()).unwrap();
    assert_eq!(
        output,
        "[cache]\ndir = /var/cache/kiln\n\n[core]\nmode =\nthreads = 8\n"
    );
}

#[test]
fn test_text_config_reads_back_unchanged() {
    let config = sample();
    let output = TextFormatter.format_config(&config).unwrap();
    let reread = kiln_config::read_ini(output.as_bytes()).unwrap();
    assert_eq!(&reread, config.raw().values());
}

#[test]
fn test_text_value_is_bare() {
    let output = TextFormatter.format_value("core", "threads", "8").unwrap();
    assert_eq!(output, "8\n");
}

#[test]
fn test_text_sources_list_origin_and_path() {
    let config = sample();
    let output = TextFormatter.format_sources(config.sources()).unwrap();
    assert_eq!(output, "overrides\n");
}

#[test]
fn test_text_empty_config_is_empty() {
    let config = ConfigLoader::from_values(ConfigValues::new());
    assert_eq!(TextFormatter.format_config(&config).unwrap(), "");
}

#[test]
fn test_json_config_is_nested_object() {
    let output = JsonFormatter.format_config(&sample()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["core"]["threads"], "8");
    assert_eq!(parsed["core"]["mode"], "");
    assert_eq!(parsed["cache"]["dir"], "/var/cache/kiln");
}

#[test]
fn test_json_section_and_value() {
    let entries = BTreeMap::from([("dir".to_string(), "/tmp".to_string())]);
    let section: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_section("cache", &entries).unwrap()).unwrap();
    assert_eq!(section["dir"], "/tmp");

    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_value("cache", "dir", "/tmp").unwrap()).unwrap();
    assert_eq!(value["section"], "cache");
    assert_eq!(value["key"], "dir");
    assert_eq!(value["value"], "/tmp");
}

#[test]
fn test_json_sources_omit_missing_path() {
    let config = sample();
    let output = JsonFormatter.format_sources(config.sources()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["origin"], "overrides");
    assert!(parsed[0].get("path").is_none());
}

#[test]
fn test_get_formatter_matches_format() {
    let config = sample();
    let json = get_formatter(OutputFormat::Json)
        .format_config(&config)
        .unwrap();
    assert!(json.starts_with('{'));
    let text = get_formatter(OutputFormat::Text)
        .format_config(&config)
        .unwrap();
    assert!(text.starts_with("[cache]"));
}
