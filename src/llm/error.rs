//! Error types for LLM provider components
//! LLM提供商组件的错误类型

use thiserror::Error;

/// LLM provider error types / LLM提供商错误类型
///
/// Display output matters here: the dispatcher classifies failures by
/// substring-matching the rendered message (see `server::handlers`), so the
/// credential variants must mention the API key in their text.
/// Display输出在这里很重要：调度器通过对渲染消息进行子串匹配来分类失败
/// （参见`server::handlers`），因此凭证变体必须在其文本中提及API密钥。
#[derive(Error, Debug)]
pub enum LlmError {
    /// Credential environment variable is not set / 凭证环境变量未设置
    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    /// Credential is present but blank / 凭证存在但为空白
    #[error("{0} API key is required")]
    EmptyCredential(&'static str),

    /// Provider name is not in the supported set / 提供商名称不在支持的集合中
    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),

    /// Upstream API call failed / 上游API调用失败
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },
}

/// Result type alias for LLM provider operations / LLM提供商操作的结果类型别名
pub type LlmResult<T> = Result<T, LlmError>;
