//! 画面状態（選択ファイル・プロンプト・送信中フラグ・結果）
//!
//! 書き込みは入力処理と送信処理のみ。送信中の再送信は `Busy` で拒否する。

use crate::error::{ImageVerseError, Result};
use crate::orchestrator::Orchestrator;
use crate::scanner::SelectedFile;
use image_verse_common::{render_result, RequestOutcome};

#[derive(Debug, Default)]
pub struct AppState {
    files: Vec<SelectedFile>,
    prompt: String,
    loading: bool,
    result: Option<RequestOutcome>,
}

/// 送信開始時点の入力のスナップショット
#[derive(Debug, Clone)]
pub struct Submission {
    pub files: Vec<SelectedFile>,
    pub prompt: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択（前回の選択は置き換え）
    pub fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&RequestOutcome> {
        self.result.as_ref()
    }

    pub fn render(&self) -> &str {
        render_result(self.loading, self.result.as_ref())
    }

    /// Idle -> Pending
    ///
    /// 枚数不足なら状態を変えずに `Validation` を返す。
    pub fn begin(&mut self, orchestrator: &Orchestrator) -> Result<Submission> {
        if self.loading {
            return Err(ImageVerseError::Busy);
        }
        orchestrator.validate(&self.files)?;

        self.loading = true;
        Ok(Submission {
            files: self.files.clone(),
            prompt: self.prompt.clone(),
        })
    }

    /// Pending -> Success | Failure
    pub fn finish(&mut self, outcome: RequestOutcome) {
        self.loading = false;
        self.result = Some(outcome);
    }

    /// begin → 送信 → finish をまとめて実行
    pub async fn submit(&mut self, orchestrator: &Orchestrator) -> Result<RequestOutcome> {
        let submission = self.begin(orchestrator)?;
        let outcome = match orchestrator.submit(&submission.files, &submission.prompt).await {
            Ok(outcome) => outcome,
            Err(e) => {
                // begin で検証済みのため通常は到達しない
                self.loading = false;
                return Err(e);
            }
        };
        self.finish(outcome.clone());
        Ok(outcome)
    }
}
