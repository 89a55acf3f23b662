//! HTTP routes for the ProFact service
//! ProFact服务的HTTP路由
//!
//! This module defines all HTTP routes and their mappings to handlers
//! 此模块定义所有HTTP路由及其到处理器的映射

use axum::{
    routing::{any, get},
    Router,
};

use super::gateway::GatewayState;
use super::handlers::{generate_profact, health_check};

/// Create HTTP routes / 创建HTTP路由
///
/// `/api/profact` is registered for every method: the handler itself answers
/// non-POST requests with the fixed 405 body instead of axum's default.
/// `/api/profact`为每个方法注册：处理器本身以固定的405响应体回答非POST请求，
/// 而不是axum的默认响应。
pub(crate) fn create_routes(state: GatewayState) -> Router {
    Router::new()
        // Generation endpoint / 生成端点
        .route("/api/profact", any(generate_profact))
        // Health check endpoint / 健康检查端点
        .route("/health", get(health_check))
        .with_state(state)
}
