//! 画像ファイル → EncodedPart

use crate::error::{ImageVerseError, Result};
use crate::scanner::SelectedFile;
use image_verse_common::{encode_bytes, EncodedPart};

/// ファイル全体を読み込んでBase64化する
///
/// 読み込みに失敗した場合は `Read` を返し、部分的な結果は返さない。
pub async fn encode_file(file: &SelectedFile) -> Result<EncodedPart> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| ImageVerseError::Read {
            path: file.path.display().to_string(),
            source,
        })?;

    tracing::debug!(file = %file.file_name, bytes = bytes.len(), "encoded");
    Ok(encode_bytes(&bytes, file.mime_type))
}
