//! ProFact: topic-to-LLM gateway service
//! ProFact: 主题到LLM的网关服务

// Shared modules / 共享模块
pub mod config;
pub mod llm;

// Service-specific modules / 服务特定模块
pub mod server;

// Re-exports / 重新导出
pub use config::*;
pub use llm::{select_provider, LlmError, LlmProvider, LlmResponse};
pub use server::{GatewayState, HttpGateway};
