//! マルチモーダルリクエストの組み立てとGemini APIの送信形式
//!
//! パート順序: 先頭にプロンプト（空文字可）、続いて画像を選択順に並べる。

use serde::{Deserialize, Serialize};

use crate::types::{EncodedPart, MimeType};

/// リクエスト中の1パート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: MimeType,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }

    pub fn as_inline_data(&self) -> Option<&InlineData> {
        match self {
            Part::InlineData { inline_data } => Some(inline_data),
            Part::Text { .. } => None,
        }
    }
}

impl From<EncodedPart> for Part {
    fn from(part: EncodedPart) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: part.mime_type,
                data: part.data,
            },
        }
    }
}

/// 1回の送信内容（モデルID + 順序付きパート）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub model: String,
    pub parts: Vec<Part>,
}

impl GenerateRequest {
    /// プロンプトと画像パートからリクエストを組み立てる
    pub fn assemble(model: &str, prompt: &str, images: Vec<EncodedPart>) -> Self {
        let mut parts = Vec::with_capacity(images.len() + 1);
        parts.push(Part::text(prompt));
        parts.extend(images.into_iter().map(Part::from));

        Self {
            model: model.to_string(),
            parts,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.parts.first().and_then(Part::as_text)
    }

    pub fn image_count(&self) -> usize {
        self.parts.iter().filter(|p| p.as_inline_data().is_some()).count()
    }

    /// generateContent のリクエストボディへ変換
    pub fn to_body(&self) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: self.parts.clone(),
            }],
        }
    }
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}
