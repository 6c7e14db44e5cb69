use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageVerseError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`imageverse config --set-api-key YOUR_KEY` で設定するか、GEMINI_API_KEY を指定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("対応していない画像形式です（PNG/JPEGのみ）: {0}")]
    UnsupportedFile(String),

    /// 送信前の枚数チェックに失敗（リクエストは発生していない）
    #[error("{notice}")]
    Validation { notice: String },

    #[error("前回の送信が処理中です")]
    Busy,

    #[error("画像読み込みエラー: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("API呼び出しエラー: {0}")]
    Dispatch(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, ImageVerseError>;
