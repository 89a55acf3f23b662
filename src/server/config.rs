//! ProFact service configuration
//! ProFact服务配置

use anyhow::{Context, Result};
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::config::base::{LogConfig, ServerConfig};

/// ProFact command line arguments / ProFact命令行参数
#[derive(Parser, Debug, Clone)]
#[command(
    name = "profact",
    version = "0.1.0",
    about = "ProFact - topic-to-LLM gateway\nProFact - 主题到LLM网关",
    long_about = "ProFact forwards a user-supplied topic to a configured LLM backend and returns the generated text.\nProFact将用户提供的主题转发到配置的LLM后端并返回生成的文本。"
)]
pub struct CliArgs {
    /// Configuration file path / 配置文件路径
    #[arg(short, long, value_name = "FILE", help = "Configuration file path / 配置文件路径")]
    pub config: Option<String>,

    /// HTTP server address / HTTP服务器地址
    #[arg(long, value_name = "ADDR", help = "HTTP server address (e.g., 0.0.0.0:3000) / HTTP服务器地址")]
    pub http_addr: Option<String>,

    /// Log level / 日志级别
    #[arg(long, value_name = "LEVEL", help = "Log level (trace, debug, info, warn, error) / 日志级别")]
    pub log_level: Option<String>,

    /// Log format / 日志格式
    #[arg(long, value_name = "FORMAT", help = "Log format (json, compact, pretty) / 日志格式")]
    pub log_format: Option<String>,
}

/// ProFact service configuration / ProFact服务配置
///
/// LLM provider selection and credentials are not part of this structure;
/// they are read from `LLM_PROVIDER` / `*_API_KEY` at request time.
/// LLM提供商选择和凭证不属于此结构；它们在请求时从
/// `LLM_PROVIDER` / `*_API_KEY`读取。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfactConfig {
    /// HTTP server configuration / HTTP服务器配置
    pub http: ServerConfig,
    /// Logging configuration / 日志配置
    pub log: LogConfig,
}

impl Default for ProfactConfig {
    fn default() -> Self {
        Self {
            http: ServerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl ProfactConfig {
    /// Load configuration with proper precedence / 按适当的优先级加载配置
    ///
    /// Precedence order (highest to lowest):
    /// 优先级顺序（从高到低）：
    /// 1. Command line arguments / 命令行参数
    /// 2. Environment variables (`PROFACT_`) / 环境变量
    /// 3. Configuration file / 配置文件
    /// 4. Default values / 默认值
    pub fn load_with_cli(args: &CliArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        figment = match &args.config {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file("config.toml")),
        };

        let mut config: Self = figment
            .merge(Env::prefixed("PROFACT_").split("_"))
            .extract()
            .context("Failed to load configuration")?;

        // Override with CLI arguments / 使用CLI参数覆盖
        if let Some(http_addr) = &args.http_addr {
            config.http.addr = http_addr
                .parse()
                .with_context(|| format!("invalid --http-addr: {}", http_addr))?;
        }

        if let Some(log_level) = &args.log_level {
            config.log.level = log_level.clone();
        }

        if let Some(log_format) = &args.log_format {
            config.log.format = log_format.clone();
        }

        Ok(config)
    }
}
