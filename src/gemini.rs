//! Gemini API連携
//!
//! APIキーはクエリパラメータで公式エンドポイント（または設定した api_base）にのみ送る。

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{ImageVerseError, Result};
use async_trait::async_trait;
use image_verse_common::{parse_response_text, GenerateRequest};

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            api_base: crate::config::DEFAULT_API_BASE.to_string(),
        }
    }

    /// 設定から生成（APIキーは環境変数を優先）
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Ok(Self::new(api_key).with_api_base(&config.api_base))
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.api_base, model)
    }
}

#[async_trait]
impl Dispatcher for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let url = format!("{}?key={}", self.endpoint(&request.model), self.api_key);

        let response = self
            .client
            .post(&url)
            .json(&request.to_body())
            .send()
            .await
            .map_err(|e| ImageVerseError::Dispatch(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImageVerseError::Dispatch(format!("failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            return Err(ImageVerseError::Dispatch(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        parse_response_text(&body).map_err(|e| ImageVerseError::Dispatch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new("key");
        assert_eq!(
            client.endpoint("gemini-1.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_custom_base() {
        let client = GeminiClient::new("key").with_api_base("http://localhost:8080/models/");
        assert_eq!(
            client.endpoint("m"),
            "http://localhost:8080/models/m:generateContent"
        );
    }

    #[test]
    fn test_from_config_uses_stored_key() {
        // 環境変数が設定されていない場合のみ検証
        if std::env::var("GEMINI_API_KEY").is_ok() {
            return;
        }
        let config = Config {
            api_key: Some("stored".into()),
            ..Default::default()
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(client.api_key, "stored");
        assert_eq!(client.name(), "gemini");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_dispatch_error() {
        let client = GeminiClient::new("key").with_api_base("http://127.0.0.1:9");
        let request = GenerateRequest::assemble("m", "", vec![]);

        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, ImageVerseError::Dispatch(_)));
    }
}
