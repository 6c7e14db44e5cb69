//! 画面表示用の固定文言

pub const TITLE: &str = "ImageVerse";

/// 結果がまだない状態
pub const NO_RESULT: &str = "No result yet";

/// 送信中
pub const PROCESSING: &str = "Processing...";

/// 読み込み・送信失敗時にユーザーへ見せる唯一のメッセージ
pub const ERROR_PROCESSING_IMAGES: &str = "Error processing images";

/// 画像未選択で送信した場合の通知
pub const SELECT_AT_LEAST_ONE: &str = "Please select at least one image.";

pub const RESULT_HEADER: &str = "Your results are shown here :";

pub const EMPTY_PROMPT_HINT: &str =
    "If you do not provide any prompt, information or comparison of the images will be displayed.";

/// 最低枚数に応じた通知文
pub fn selection_notice(min_files: usize) -> String {
    if min_files <= 1 {
        SELECT_AT_LEAST_ONE.to_string()
    } else {
        format!("Please select at least {} images.", min_files)
    }
}
