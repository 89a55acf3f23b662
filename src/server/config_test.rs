//! Tests for ProFact service configuration
//! ProFact服务配置测试

use std::io::Write;

use serial_test::serial;

use crate::server::config::{CliArgs, ProfactConfig};

fn default_args() -> CliArgs {
    CliArgs {
        config: None,
        http_addr: None,
        log_level: None,
        log_format: None,
    }
}

#[test]
#[serial]
fn test_default_config() {
    // Test default configuration values / 测试默认配置值
    let config = ProfactConfig::load_with_cli(&default_args()).unwrap();

    assert_eq!(config.http.addr, "127.0.0.1:3000".parse().unwrap());
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.format, "pretty");
}

#[test]
#[serial]
fn test_config_from_file() {
    // Test loading configuration from a TOML file / 测试从TOML文件加载配置
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[http]
addr = "0.0.0.0:8080"

[log]
level = "debug"
format = "json"
"#
    )
    .unwrap();

    let args = CliArgs {
        config: Some(file.path().to_string_lossy().to_string()),
        ..default_args()
    };
    let config = ProfactConfig::load_with_cli(&args).unwrap();

    assert_eq!(config.http.addr, "0.0.0.0:8080".parse().unwrap());
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.format, "json");
}

#[test]
#[serial]
fn test_cli_overrides_file() {
    // CLI arguments take precedence over the config file
    // 命令行参数优先于配置文件
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[http]
addr = "0.0.0.0:8080"

[log]
level = "debug"
"#
    )
    .unwrap();

    let args = CliArgs {
        config: Some(file.path().to_string_lossy().to_string()),
        http_addr: Some("127.0.0.1:4000".to_string()),
        log_level: Some("warn".to_string()),
        log_format: Some("compact".to_string()),
    };
    let config = ProfactConfig::load_with_cli(&args).unwrap();

    assert_eq!(config.http.addr, "127.0.0.1:4000".parse().unwrap());
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.log.format, "compact");
}

#[test]
#[serial]
fn test_env_overrides_defaults() {
    // PROFACT_-prefixed environment variables layer over defaults
    // PROFACT_前缀的环境变量覆盖默认值
    std::env::set_var("PROFACT_LOG_LEVEL", "trace");

    let config = ProfactConfig::load_with_cli(&default_args()).unwrap();
    assert_eq!(config.log.level, "trace");

    std::env::remove_var("PROFACT_LOG_LEVEL");
}

#[test]
#[serial]
fn test_invalid_http_addr_is_rejected() {
    // Malformed addresses fail loading instead of being silently dropped
    // 格式错误的地址会导致加载失败，而不是被静默丢弃
    let args = CliArgs {
        http_addr: Some("not-an-address".to_string()),
        ..default_args()
    };

    assert!(ProfactConfig::load_with_cli(&args).is_err());
}
