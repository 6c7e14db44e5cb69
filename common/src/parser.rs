//! APIレスポンスパーサー
//!
//! generateContent のレスポンスから表示用テキストを取り出す。
//! 検証するのはテキストの有無のみ。

use serde::Deserialize;

use crate::error::{Error, Result};

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiResponse {
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// 先頭候補のテキストパートを連結して返す
///
/// # Returns
/// * `Ok(String)` - 連結したテキスト
/// * `Err` - ブロックされた場合、候補がない場合、テキストパートがない場合
pub fn extract_text(response: &GeminiResponse) -> Result<String> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(Error::Response(format!("prompt blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| Error::Response("response has no candidates".to_string()))?;

    let texts: Vec<&str> = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if texts.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(Error::Response(format!(
            "response has no text (finish reason: {})",
            reason
        )));
    }

    Ok(texts.concat())
}

/// 生のレスポンスボディをパースしてテキストを取り出す
pub fn parse_response_text(body: &str) -> Result<String> {
    let response: GeminiResponse = serde_json::from_str(body)?;
    extract_text(&response)
}
