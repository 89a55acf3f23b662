//! OpenAI chat-completions provider
//! OpenAI聊天补全提供商

use serde_json::{json, Value};

use super::error::{LlmError, LlmResult};
use super::{build_prompt, LlmProvider, LlmResponse};
use async_trait::async_trait;

/// Default API base URL / 默认API基础URL
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
/// Fixed model identifier / 固定模型标识符
const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides concise, factual information.";
const PROVIDER_LABEL: &str = "OpenAI";

/// OpenAI provider implementation / OpenAI提供商实现
#[derive(Debug)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Create a provider against the public API / 创建面向公共API的提供商
    pub fn new(api_key: impl Into<String>) -> LlmResult<Self> {
        Self::with_base_url(api_key, OPENAI_API_BASE)
    }

    /// Create a provider against a custom base URL (used by tests)
    /// 创建面向自定义基础URL的提供商（测试使用）
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> LlmResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::EmptyCredential(PROVIDER_LABEL));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        })
    }

    fn join_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let p = path.trim_start_matches('/');
        format!("{}/{}", base, p)
    }

    fn chat_completions_url(&self) -> String {
        if self.base_url.contains("/v1") {
            self.join_url("chat/completions")
        } else {
            self.join_url("v1/chat/completions")
        }
    }

    fn build_request_body(topic: &str) -> Value {
        json!({
            "model": OPENAI_MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(topic) },
            ],
            "max_tokens": 150,
            "temperature": 0.7,
        })
    }

    fn extract_content(json: &Value) -> String {
        json.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or("No response generated")
            .to_string()
    }

    fn extract_error_message(json: &Value) -> Option<String> {
        let e = json.get("error")?;
        let msg = e.get("message").and_then(|v| v.as_str()).unwrap_or("");
        let ty = e.get("type").and_then(|v| v.as_str()).unwrap_or("");

        let mut parts: Vec<String> = Vec::new();
        if !ty.is_empty() {
            parts.push(ty.to_string());
        }
        if !msg.is_empty() {
            parts.push(msg.to_string());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(": "))
        }
    }

    fn api_error(message: impl Into<String>) -> LlmError {
        LlmError::Api {
            provider: PROVIDER_LABEL,
            message: message.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_LABEL
    }

    async fn generate_response(&self, topic: &str) -> LlmResult<LlmResponse> {
        let body = Self::build_request_body(topic);

        let resp = self
            .client
            .post(self.chat_completions_url())
            .header("authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::api_error(e.to_string()))?;

        let status = resp.status();
        let parsed: Value = resp
            .json()
            .await
            .map_err(|e| Self::api_error(e.to_string()))?;

        if !status.is_success() {
            let message = match Self::extract_error_message(&parsed) {
                Some(m) => format!("upstream status: {}: {}", status.as_u16(), m),
                None => format!("upstream status: {}", status.as_u16()),
            };
            return Err(Self::api_error(message));
        }

        Ok(LlmResponse {
            content: Self::extract_content(&parsed),
            provider: PROVIDER_LABEL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_error() {
        // Blank credential fails fast / 空白凭证快速失败
        let err = OpenAiProvider::new("  ").unwrap_err();
        assert!(matches!(err, LlmError::EmptyCredential(_)));
        assert_eq!(err.to_string(), "OpenAI API key is required");
    }

    #[test]
    fn test_join_url() {
        let provider =
            OpenAiProvider::with_base_url("k", "https://api.openai.com/v1/").unwrap();
        assert_eq!(
            provider.chat_completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        // Bases without /v1 get the version segment appended / 不带/v1的基础URL会附加版本段
        let provider = OpenAiProvider::with_base_url("k", "http://localhost:8080").unwrap();
        assert_eq!(
            provider.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_build_request_body() {
        // Fixed model, prompt template, and sampling parameters
        // 固定的模型、提示模板和采样参数
        let body = OpenAiProvider::build_request_body("quantum computing");

        assert_eq!(body["model"], OPENAI_MODEL);
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][1]["content"],
            "Provide a brief, informative response about: quantum computing"
        );
    }

    #[test]
    fn test_extract_content() {
        let parsed = serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Hello there" } }
            ]
        });
        assert_eq!(OpenAiProvider::extract_content(&parsed), "Hello there");
    }

    #[test]
    fn test_extract_content_fallback() {
        // Missing choices fall back to the fixed placeholder / 缺少choices时回退到固定占位符
        let parsed = serde_json::json!({ "choices": [] });
        assert_eq!(
            OpenAiProvider::extract_content(&parsed),
            "No response generated"
        );
    }

    #[test]
    fn test_extract_error_message() {
        let parsed = serde_json::json!({
            "error": { "type": "invalid_request_error", "message": "bad model" }
        });
        assert_eq!(
            OpenAiProvider::extract_error_message(&parsed).unwrap(),
            "invalid_request_error: bad model"
        );

        let no_error = serde_json::json!({ "ok": true });
        assert!(OpenAiProvider::extract_error_message(&no_error).is_none());
    }
}
