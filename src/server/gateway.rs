//! HTTP gateway for the ProFact service
//! ProFact服务的HTTP网关

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use super::routes::create_routes;
use crate::llm::{select_provider, LlmProvider, LlmResult};

/// Per-request provider resolution function / 每个请求的提供商解析函数
///
/// Injectable so tests can swap the environment-driven lookup for a mock.
/// 可注入，以便测试可以用模拟替换环境驱动的查找。
pub type ProviderFactory = Arc<dyn Fn() -> LlmResult<Box<dyn LlmProvider>> + Send + Sync>;

/// HTTP gateway state / HTTP网关状态
#[derive(Clone)]
pub struct GatewayState {
    pub provider_factory: ProviderFactory,
}

impl GatewayState {
    /// State backed by the environment-driven provider selection
    /// 由环境驱动的提供商选择支持的状态
    pub fn new() -> Self {
        Self::with_provider_factory(Arc::new(select_provider))
    }

    /// State with an injected provider factory / 带有注入的提供商工厂的状态
    pub fn with_provider_factory(provider_factory: ProviderFactory) -> Self {
        Self { provider_factory }
    }
}

impl Default for GatewayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create HTTP gateway router / 创建HTTP网关路由器
pub fn create_gateway_router(state: GatewayState) -> Router {
    // Use the centralized route creation function / 使用集中的路由创建函数
    create_routes(state).layer(CorsLayer::permissive())
}

/// ProFact HTTP gateway / ProFact HTTP网关
pub struct HttpGateway {
    addr: SocketAddr,
    cancel_token: CancellationToken,
}

impl HttpGateway {
    /// Create a new HTTP gateway / 创建新的HTTP网关
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Get the HTTP address / 获取HTTP地址
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Token that stops the gateway when cancelled / 取消时停止网关的令牌
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Start the HTTP gateway / 启动HTTP网关
    pub async fn start(self) -> Result<()> {
        info!("Starting ProFact HTTP gateway on {}", self.addr);

        let state = GatewayState::new();
        let app = create_gateway_router(state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("ProFact HTTP gateway listening on {}", self.addr);

        let shutdown = self.cancel_token.clone();
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
        {
            error!("ProFact HTTP gateway error: {}", e);
            return Err(e.into());
        }

        Ok(())
    }
}
