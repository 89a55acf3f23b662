//! LLM provider adapters for the ProFact service
//! ProFact服务的LLM提供商适配器
//!
//! This module contains the text-generation capability behind the
//! `/api/profact` endpoint:
//! 此模块包含`/api/profact`端点背后的文本生成能力：
//!
//! - `LlmProvider`: the capability trait / 能力特征
//! - `openai` / `gemini`: the two backend variants / 两个后端变体
//! - `select_provider`: environment-driven variant selection / 环境驱动的变体选择
//!
//! Selection is resolved once per request and never cached; each provider
//! instance performs exactly one outbound call.
//! 选择在每个请求中解析一次且从不缓存；每个提供商实例只执行一次出站调用。

pub mod error;
pub mod gemini;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::{LlmError, LlmResult};
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Environment variable naming the active provider / 命名活动提供商的环境变量
pub const PROVIDER_ENV: &str = "LLM_PROVIDER";
/// OpenAI credential environment variable / OpenAI凭证环境变量
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Gemini credential environment variable / Gemini凭证环境变量
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fixed prompt template sent to every backend / 发送到每个后端的固定提示模板
pub(crate) fn build_prompt(topic: &str) -> String {
    format!("Provide a brief, informative response about: {}", topic)
}

/// Normalized reply from one provider invocation / 一次提供商调用的规范化回复
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmResponse {
    /// Generated text / 生成的文本
    pub content: String,
    /// Provider label ("OpenAI" or "Gemini") / 提供商标签
    pub provider: String,
}

/// Text-generation capability implemented by interchangeable backends
/// 由可互换后端实现的文本生成能力
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Provider label used in responses and error prefixes
    /// 用于响应和错误前缀的提供商标签
    fn name(&self) -> &'static str;

    /// Translate a topic into one outbound call and normalize the reply
    /// 将主题转换为一次出站调用并规范化回复
    async fn generate_response(&self, topic: &str) -> LlmResult<LlmResponse>;
}

/// Resolve the configured provider from the environment
/// 从环境解析配置的提供商
///
/// `LLM_PROVIDER` chooses the variant (`openai` or `gemini`, defaulting to
/// `gemini`); the selected variant's credential variable must be set.
/// `LLM_PROVIDER`选择变体（`openai`或`gemini`，默认为`gemini`）；
/// 所选变体的凭证变量必须已设置。
pub fn select_provider() -> LlmResult<Box<dyn LlmProvider>> {
    let name = std::env::var(PROVIDER_ENV).unwrap_or_else(|_| "gemini".to_string());

    match name.trim().to_ascii_lowercase().as_str() {
        "openai" => {
            let api_key = std::env::var(OPENAI_API_KEY_ENV)
                .map_err(|_| LlmError::MissingCredential(OPENAI_API_KEY_ENV))?;
            Ok(Box::new(OpenAiProvider::new(api_key)?))
        }
        "gemini" | "" => {
            let api_key = std::env::var(GEMINI_API_KEY_ENV)
                .map_err(|_| LlmError::MissingCredential(GEMINI_API_KEY_ENV))?;
            Ok(Box::new(GeminiProvider::new(api_key)?))
        }
        other => Err(LlmError::UnsupportedProvider(other.to_string())),
    }
}
