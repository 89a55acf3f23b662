//! Base configuration structures and utilities
//! 基础配置结构和工具

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Base server configuration / 基础服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address / 服务器绑定地址
    #[serde(deserialize_with = "deserialize_socket_addr")]
    pub addr: SocketAddr,
    /// Enable TLS / 启用TLS
    pub enable_tls: bool,
    /// TLS certificate path / TLS证书路径
    pub cert_path: Option<String>,
    /// TLS private key path / TLS私钥路径
    pub key_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".parse().unwrap(),
            enable_tls: false,
            cert_path: None,
            key_path: None,
        }
    }
}

fn deserialize_socket_addr<'de, D>(deserializer: D) -> Result<SocketAddr, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

/// Base logging configuration / 基础日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level / 日志级别
    pub level: String,
    /// Log format / 日志格式
    pub format: String,
    /// Log output file / 日志输出文件
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Convert to the common LoggingConfig used by init_tracing
    /// 转换为init_tracing使用的通用LoggingConfig
    pub fn to_logging_config(&self) -> crate::config::LoggingConfig {
        crate::config::LoggingConfig {
            level: self.level.clone(),
            format: self.format.clone(),
            file_enabled: self.file.is_some(),
            file_path: self.file.as_ref().map(std::path::PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        // Test default server configuration / 测试默认服务器配置
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 3000);
        assert!(!config.enable_tls);
        assert!(config.cert_path.is_none());
        assert!(config.key_path.is_none());
    }

    #[test]
    fn test_server_config_addr_from_string() {
        // Addresses come in as strings from TOML and env sources
        // 地址从TOML和环境变量源以字符串形式传入
        let config: ServerConfig = toml::from_str(r#"addr = "0.0.0.0:8080""#).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_log_config_to_logging_config() {
        // Test conversion into the init_tracing shape / 测试转换为init_tracing的形状
        let config = LogConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
            file: Some("/tmp/profact.log".to_string()),
        };
        let logging = config.to_logging_config();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "json");
        assert!(logging.file_enabled);
        assert_eq!(
            logging.file_path.unwrap(),
            std::path::PathBuf::from("/tmp/profact.log")
        );
    }
}
