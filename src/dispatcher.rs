//! 外部モデルへの送信インターフェース

use crate::error::Result;
use async_trait::async_trait;
use image_verse_common::GenerateRequest;

/// 組み立て済みリクエストを1回送信し、応答テキストを返す
///
/// 失敗はすべて `ImageVerseError::Dispatch` として返す。
#[async_trait]
pub trait Dispatcher: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}
