//! 画像・リクエスト結果の型定義
//!
//! - MimeType: 受け付ける画像形式（PNG/JPEG のみ）
//! - EncodedPart: Base64化済みの画像データ
//! - RequestOutcome: 1回の送信結果

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 受け付ける画像のMIMEタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MimeType {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Png => "image/png",
            MimeType::Jpeg => "image/jpeg",
        }
    }

    /// 拡張子から判定（大文字小文字は無視）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(MimeType::Png),
            "jpg" | "jpeg" => Some(MimeType::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image/png" => Ok(MimeType::Png),
            "image/jpeg" | "image/jpg" => Ok(MimeType::Jpeg),
            _ => Err(format!("Unsupported MIME type: {}. Use image/png or image/jpeg", s)),
        }
    }
}

/// Base64エンコード済みの画像パート
///
/// `data` はData URLのプレフィックスを含まない純粋なBase64文字列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPart {
    pub data: String,
    pub mime_type: MimeType,
}

/// 送信結果（送信中の状態は AppState の loading で表す）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum RequestOutcome {
    Success(String),
    Failure(String),
}

impl RequestOutcome {
    /// 表示用テキスト
    pub fn display_text(&self) -> &str {
        match self {
            RequestOutcome::Success(text) | RequestOutcome::Failure(text) => text.as_str(),
        }
    }
}
