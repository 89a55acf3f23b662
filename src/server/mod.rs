//! ProFact HTTP service module
//! ProFact HTTP服务模块
//!
//! This module contains all service-facing functionality including:
//! 此模块包含所有面向服务的功能，包括：
//!
//! - Request validation and dispatch / 请求验证和调度
//! - Provider resolution per request / 每个请求的提供商解析
//! - Configuration management / 配置管理
//! - HTTP API handlers / HTTP API处理器
//!
//! ## Module Structure / 模块结构
//!
//! - `config`: service-specific configuration / 服务特定配置
//! - `handlers`: HTTP request handlers / HTTP请求处理器
//! - `gateway`: HTTP gateway implementation / HTTP网关实现
//! - `routes`: route table / 路由表

pub mod config;
pub mod gateway;
pub mod handlers;
pub mod routes;

#[cfg(test)]
pub mod config_test;

// Re-export commonly used types / 重新导出常用类型
pub use config::{CliArgs, ProfactConfig};
pub use gateway::{create_gateway_router, GatewayState, HttpGateway, ProviderFactory};
pub use handlers::*;
