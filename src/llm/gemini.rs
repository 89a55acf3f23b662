//! Google Gemini generateContent provider
//! Google Gemini generateContent提供商

use serde_json::{json, Value};

use super::error::{LlmError, LlmResult};
use super::{build_prompt, LlmProvider, LlmResponse};
use async_trait::async_trait;

/// Default API base URL / 默认API基础URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// Fixed model identifier / 固定模型标识符
const GEMINI_MODEL: &str = "gemini-pro";
const PROVIDER_LABEL: &str = "Gemini";

/// Google Gemini provider implementation / Google Gemini提供商实现
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Create a provider against the public API / 创建面向公共API的提供商
    pub fn new(api_key: impl Into<String>) -> LlmResult<Self> {
        Self::with_base_url(api_key, GEMINI_API_BASE)
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

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            GEMINI_MODEL
        )
    }

    fn build_request_body(topic: &str) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": build_prompt(topic) } ] }
            ]
        })
    }

    fn extract_content(json: &Value) -> Option<String> {
        json.get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn extract_error_message(json: &Value) -> Option<String> {
        let e = json.get("error")?;
        let msg = e.get("message").and_then(|v| v.as_str()).unwrap_or("");
        let status = e.get("status").and_then(|v| v.as_str()).unwrap_or("");

        let mut parts: Vec<String> = Vec::new();
        if !status.is_empty() {
            parts.push(status.to_string());
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
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_LABEL
    }

    async fn generate_response(&self, topic: &str) -> LlmResult<LlmResponse> {
        let body = Self::build_request_body(topic);

        let resp = self
            .client
            .post(self.generate_content_url())
            .query(&[("key", self.api_key.as_str())])
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

        let content = Self::extract_content(&parsed)
            .ok_or_else(|| Self::api_error("response contained no candidate text"))?;

        Ok(LlmResponse {
            content,
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
        let err = GeminiProvider::new("").unwrap_err();
        assert!(matches!(err, LlmError::EmptyCredential(_)));
        assert_eq!(err.to_string(), "Gemini API key is required");
    }

    #[test]
    fn test_generate_content_url() {
        let provider = GeminiProvider::with_base_url("k", "http://localhost:9090/").unwrap();
        assert_eq!(
            provider.generate_content_url(),
            "http://localhost:9090/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_build_request_body() {
        // Prompt template lands in the first part / 提示模板落在第一个part中
        let body = GeminiProvider::build_request_body("black holes");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Provide a brief, informative response about: black holes"
        );
    }

    #[test]
    fn test_extract_content() {
        let parsed = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Gravity wins" } ] } }
            ]
        });
        assert_eq!(
            GeminiProvider::extract_content(&parsed).unwrap(),
            "Gravity wins"
        );
    }

    #[test]
    fn test_extract_content_missing_candidates() {
        // An empty reply is surfaced as an API error upstream / 空回复在上游作为API错误呈现
        let parsed = serde_json::json!({ "candidates": [] });
        assert!(GeminiProvider::extract_content(&parsed).is_none());
    }

    #[test]
    fn test_extract_error_message() {
        let parsed = serde_json::json!({
            "error": { "status": "PERMISSION_DENIED", "message": "key expired" }
        });
        assert_eq!(
            GeminiProvider::extract_error_message(&parsed).unwrap(),
            "PERMISSION_DENIED: key expired"
        );
    }
}
