//! ImageVerse Common Library
//!
//! 画像のBase64化、リクエスト組み立て、レスポンス解析など
//! ネットワークやファイルI/Oに依存しない部分

pub mod types;
pub mod error;
pub mod encoding;
pub mod request;
pub mod parser;
pub mod messages;
pub mod view;

pub use types::{EncodedPart, MimeType, RequestOutcome};
pub use error::{Error, Result};
pub use encoding::{decode_part, encode_bytes};
pub use request::{GenerateRequest, GeminiRequest, InlineData, Part};
pub use parser::{extract_text, parse_response_text, GeminiResponse};
pub use view::render_result;
