use std::collections::HashMap;

use serial_test::serial;

use unicornd::config::{AppConfig, LogFormat, DEFAULT_ADDRESS};

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn address_defaults_to_localhost() {
    let config = AppConfig::from_env_map(HashMap::new()).unwrap();

    assert_eq!(config.address, DEFAULT_ADDRESS);
    assert_eq!(config.address, "localhost:8080");
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.format, LogFormat::Text);
}

#[test]
fn address_is_overridden_by_environment() {
    let config =
        AppConfig::from_env_map(vars(&[("UNICORND_ADDRESS", "127.0.0.1:9999")])).unwrap();

    assert_eq!(config.address, "127.0.0.1:9999");
}

#[test]
fn empty_address_falls_back_to_default() {
    let config = AppConfig::from_env_map(vars(&[("UNICORND_ADDRESS", "  ")])).unwrap();

    assert_eq!(config.address, DEFAULT_ADDRESS);
}

#[test]
fn logging_section_is_read_from_environment() {
    let config = AppConfig::from_env_map(vars(&[
        ("UNICORND_LOG_LEVEL", "debug"),
        ("UNICORND_LOG_FORMAT", "json"),
    ]))
    .unwrap();

    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.format, LogFormat::Json);
}

#[test]
fn invalid_log_format_falls_back_to_defaults() {
    let config = AppConfig::from_env_map(vars(&[
        ("UNICORND_ADDRESS", "127.0.0.1:9999"),
        ("UNICORND_LOG_FORMAT", "yaml"),
    ]))
    .unwrap();

    assert_eq!(config.address, "127.0.0.1:9999");
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.format, LogFormat::Text);
    assert!(config.log_fallback.is_some());
}

#[test]
fn malformed_log_section_does_not_block_startup() {
    let config = AppConfig::from_env_map(vars(&[
        ("UNICORND_ADDRESS", "127.0.0.1:0"),
        ("UNICORND_LOG", "x"),
    ]))
    .unwrap();

    assert_eq!(config.address, "127.0.0.1:0");
    assert_eq!(config.log.format, LogFormat::Text);
    assert!(config.log_fallback.is_some());
}

#[test]
fn valid_logging_section_reports_no_fallback() {
    let config = AppConfig::from_env_map(vars(&[("UNICORND_LOG_LEVEL", "warn")])).unwrap();

    assert_eq!(config.log.level, "warn");
    assert!(config.log_fallback.is_none());
}

#[test]
#[serial]
fn load_reads_address_from_process_environment() {
    std::env::set_var("UNICORND_ADDRESS", "127.0.0.1:9999");
    let overridden = AppConfig::load();
    std::env::remove_var("UNICORND_ADDRESS");

    assert_eq!(overridden.unwrap().address, "127.0.0.1:9999");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.address, DEFAULT_ADDRESS);
}
