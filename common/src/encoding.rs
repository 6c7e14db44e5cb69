//! 画像バイト列 → Base64 変換

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};
use crate::types::{EncodedPart, MimeType};

/// バイト列をBase64化してパートを作る（改行なし・パディングあり）
pub fn encode_bytes(bytes: &[u8], mime_type: MimeType) -> EncodedPart {
    EncodedPart {
        data: STANDARD.encode(bytes),
        mime_type,
    }
}

/// パートのBase64を元のバイト列に戻す
pub fn decode_part(part: &EncodedPart) -> Result<Vec<u8>> {
    STANDARD
        .decode(part.data.as_bytes())
        .map_err(|e| Error::Decode(e.to_string()))
}
