//! HTTP request handlers for the ProFact service
//! ProFact服务的HTTP请求处理器

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::panic::AssertUnwindSafe;
use tracing::{error, info};

use super::gateway::GatewayState;
use crate::llm::LlmError;

/// Maximum raw topic length in characters / 主题的最大原始字符长度
pub const MAX_TOPIC_CHARS: usize = 500;

/// Successful generation response / 成功的生成响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text / 生成的文本
    pub content: String,
    /// Provider label / 提供商标签
    pub provider: String,
    /// Trimmed topic echoed back / 回显的修剪后主题
    pub topic: String,
}

/// Error response body / 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a provider failure to an HTTP response / 将提供商失败映射到HTTP响应
///
/// Classification is a substring match over the rendered message. Known
/// fragility: a backend error that merely mentions "API key" is classified
/// as a configuration error.
/// 分类是对渲染消息的子串匹配。已知的脆弱性：仅提及"API key"的后端错误
/// 会被分类为配置错误。
fn provider_error_response(err: &LlmError) -> Response {
    let message = err.to_string();
    error!("Provider error: {}", message);

    if message.to_lowercase().contains("api key") || message.contains("API_KEY") {
        return error_json(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error. Please check API keys.",
        );
    }

    error_json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("Server error: {}", message),
    )
}

/// Extract a string `topic` field from the raw request body
/// 从原始请求体中提取字符串`topic`字段
///
/// Unparsable bodies and non-string fields are treated the same as a
/// missing field.
/// 无法解析的请求体和非字符串字段与缺失字段同等对待。
fn extract_topic(body: &Bytes) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("topic")?
        .as_str()
        .map(str::to_string)
}

/// Generation endpoint: validate, dispatch, normalize
/// 生成端点：验证、调度、规范化
pub async fn generate_profact(
    State(state): State<GatewayState>,
    method: Method,
    body: Bytes,
) -> Response {
    // Only allow POST requests / 仅允许POST请求
    if method != Method::POST {
        return error_json(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed. Use POST.",
        );
    }

    // Validate request body / 验证请求体
    let topic = match extract_topic(&body) {
        Some(topic) => topic,
        None => {
            return error_json(
                StatusCode::BAD_REQUEST,
                "Invalid request. \"topic\" field is required and must be a string.",
            );
        }
    };

    if topic.trim().is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Topic cannot be empty.");
    }

    // Length is checked on the raw, untrimmed topic / 长度检查针对未修剪的原始主题
    if topic.chars().count() > MAX_TOPIC_CHARS {
        return error_json(
            StatusCode::BAD_REQUEST,
            "Topic is too long. Maximum 500 characters.",
        );
    }

    let trimmed = topic.trim().to_string();
    info!("Generating response for topic ({} chars)", trimmed.len());

    // Resolve and invoke the provider; a panic anywhere in that path maps to
    // the generic failure body rather than tearing down the connection.
    // 解析并调用提供商；该路径中任何位置的panic都映射到通用失败响应体，
    // 而不是断开连接。
    let factory = state.provider_factory.clone();
    let request_topic = trimmed.clone();
    let outcome = AssertUnwindSafe(async move {
        let provider = factory()?;
        provider.generate_response(&request_topic).await
    })
    .catch_unwind()
    .await;

    match outcome {
        Ok(Ok(response)) => (
            StatusCode::OK,
            Json(GenerateResponse {
                content: response.content,
                provider: response.provider,
                topic: trimmed,
            }),
        )
            .into_response(),
        Ok(Err(err)) => provider_error_response(&err),
        Err(_) => {
            error!("Provider invocation panicked");
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred.",
            )
        }
    }
}

/// Health check endpoint / 健康检查端点
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "profact"
    }))
}
