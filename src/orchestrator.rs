//! 送信処理
//!
//! 1. 枚数チェック（不足なら何もせず Validation）
//! 2. 全画像を並行してBase64化（選択順を保持して結合）
//! 3. プロンプト + 画像パートを1リクエストに組み立てて送信
//! 4. 応答テキストを Success、読み込み/送信の失敗は固定文言の Failure にする

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::encoder::encode_file;
use crate::error::{ImageVerseError, Result};
use crate::scanner::SelectedFile;
use futures::future::try_join_all;
use image_verse_common::messages::{selection_notice, ERROR_PROCESSING_IMAGES};
use image_verse_common::{GenerateRequest, RequestOutcome};
use std::sync::Arc;

/// 枚数チェック（クライアント生成前にも使う）
pub fn check_selection(files: &[SelectedFile], min_files: usize) -> Result<()> {
    let min_files = min_files.max(1);
    if files.len() < min_files {
        return Err(ImageVerseError::Validation {
            notice: selection_notice(min_files),
        });
    }
    Ok(())
}

pub struct Orchestrator {
    dispatcher: Arc<dyn Dispatcher>,
    model: String,
    min_files: usize,
    default_prompt: Option<String>,
}

impl Orchestrator {
    pub fn new(dispatcher: Arc<dyn Dispatcher>, model: impl Into<String>) -> Self {
        Self {
            dispatcher,
            model: model.into(),
            min_files: 1,
            default_prompt: None,
        }
    }

    pub fn from_config(dispatcher: Arc<dyn Dispatcher>, config: &Config) -> Self {
        Self::new(dispatcher, config.model.clone())
            .with_min_files(config.min_files())
            .with_default_prompt(config.default_prompt.clone())
    }

    pub fn with_min_files(mut self, min_files: usize) -> Self {
        self.min_files = min_files.max(1);
        self
    }

    pub fn with_default_prompt(mut self, default_prompt: Option<String>) -> Self {
        self.default_prompt = default_prompt;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn min_files(&self) -> usize {
        self.min_files
    }

    /// 送信前の枚数チェック
    pub fn validate(&self, files: &[SelectedFile]) -> Result<()> {
        check_selection(files, self.min_files)
    }

    /// 1回分の送信を実行
    ///
    /// `Err` になるのは枚数不足（Validation）のみ。読み込み・送信の失敗は
    /// ログに詳細を残し、`Failure("Error processing images")` として返す。
    pub async fn submit(&self, files: &[SelectedFile], prompt: &str) -> Result<RequestOutcome> {
        self.validate(files)?;

        tracing::info!(
            files = files.len(),
            model = %self.model,
            dispatcher = self.dispatcher.name(),
            "submitting"
        );

        match self.run(files, prompt).await {
            Ok(text) => Ok(RequestOutcome::Success(text)),
            Err(e) => {
                tracing::error!(error = %e, "Error processing images");
                Ok(RequestOutcome::Failure(ERROR_PROCESSING_IMAGES.to_string()))
            }
        }
    }

    async fn run(&self, files: &[SelectedFile], prompt: &str) -> Result<String> {
        // 1枚でも失敗したら送信しない
        let images = try_join_all(files.iter().map(encode_file)).await?;

        let request = GenerateRequest::assemble(&self.model, self.effective_prompt(prompt), images);
        tracing::debug!(parts = request.parts.len(), "request assembled");

        self.dispatcher.generate(&request).await
    }

    fn effective_prompt<'a>(&'a self, prompt: &'a str) -> &'a str {
        match &self.default_prompt {
            Some(default) if prompt.is_empty() => default.as_str(),
            _ => prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorder {
        requests: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl Dispatcher for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            Ok("ok".into())
        }
    }

    fn recorder() -> Arc<Recorder> {
        Arc::new(Recorder { requests: Mutex::new(Vec::new()) })
    }

    #[test]
    fn test_validate_min_files() {
        let orchestrator = Orchestrator::new(recorder(), "m").with_min_files(2);
        let one = vec![SelectedFile::from_path(std::path::Path::new("a.png")).unwrap()];

        let err = orchestrator.validate(&one).unwrap_err();
        assert_eq!(err.to_string(), "Please select at least 2 images.");
    }

    #[test]
    fn test_check_selection_without_orchestrator() {
        let err = check_selection(&[], 1).unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one image.");

        let err = check_selection(&[], 0).unwrap_err();
        assert!(matches!(err, ImageVerseError::Validation { .. }));

        let one = vec![SelectedFile::from_path(std::path::Path::new("a.jpg")).unwrap()];
        assert!(check_selection(&one, 1).is_ok());
    }

    #[test]
    fn test_min_files_floor() {
        let orchestrator = Orchestrator::new(recorder(), "m").with_min_files(0);
        assert_eq!(orchestrator.min_files(), 1);
        assert!(orchestrator.validate(&[]).is_err());
    }

    #[tokio::test]
    async fn test_default_prompt_replaces_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        std::fs::write(&path, b"a").unwrap();
        let files = vec![SelectedFile::from_path(&path).unwrap()];

        let rec = recorder();
        let orchestrator = Orchestrator::new(rec.clone(), "m")
            .with_default_prompt(Some("Describe the images.".into()));

        orchestrator.submit(&files, "").await.unwrap();
        orchestrator.submit(&files, "compare").await.unwrap();

        let requests = rec.requests.lock().unwrap();
        assert_eq!(requests[0].prompt(), Some("Describe the images."));
        assert_eq!(requests[1].prompt(), Some("compare"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            model: "gemini-2.0-flash".into(),
            min_files: 2,
            ..Default::default()
        };
        let orchestrator = Orchestrator::from_config(recorder(), &config);
        assert_eq!(orchestrator.model(), "gemini-2.0-flash");
        assert_eq!(orchestrator.min_files(), 2);
    }
}
