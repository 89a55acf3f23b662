//! ProFact service main entry point
//! ProFact服务主入口点

use clap::Parser;
use profact::config::init_tracing;
use profact::llm::PROVIDER_ENV;
use profact::server::config::{CliArgs, ProfactConfig};
use profact::server::HttpGateway;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments / 解析命令行参数
    let args = CliArgs::parse();

    // Load configuration with CLI override / 使用命令行覆盖加载配置
    let cfg = ProfactConfig::load_with_cli(&args)?;
    let config = Arc::new(cfg);

    // Initialize logging with configuration / 使用配置初始化日志
    init_tracing(&config.log.to_logging_config())?;

    let provider = std::env::var(PROVIDER_ENV).unwrap_or_else(|_| "gemini".to_string());
    tracing::info!("ProFact server starting with:");
    tracing::info!("  - HTTP server on: {}", config.http.addr);
    tracing::info!("  - LLM provider: {}", provider);

    // Initialize HTTP gateway / 初始化HTTP网关
    let http_gateway = HttpGateway::new(config.http.addr);
    let cancel_token = http_gateway.cancel_token();
    let http_handle = tokio::spawn(async move {
        if let Err(e) = http_gateway.start().await {
            tracing::error!("HTTP gateway error: {}", e);
        }
    });

    tracing::info!("ProFact server started successfully");
    tracing::info!("HTTP gateway: http://{}", config.http.addr);

    // Wait for shutdown signal / 等待关闭信号
    tokio::signal::ctrl_c().await?;
    tracing::info!("ProFact server shutting down");

    // Graceful shutdown / 优雅关闭
    cancel_token.cancel();
    let _ = http_handle.await;

    Ok(())
}
