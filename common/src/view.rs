//! 結果パネルの表示内容

use crate::messages::{NO_RESULT, PROCESSING};
use crate::types::RequestOutcome;

/// 結果パネルに表示する文字列
///
/// 送信中は結果より優先して "Processing..." を返す。
pub fn render_result(loading: bool, result: Option<&RequestOutcome>) -> &str {
    if loading {
        return PROCESSING;
    }
    match result {
        None => NO_RESULT,
        Some(outcome) => outcome.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_idle() {
        assert_eq!(render_result(false, None), "No result yet");
    }

    #[test]
    fn test_render_loading_overrides_result() {
        let prev = RequestOutcome::Success("old".into());
        assert_eq!(render_result(true, Some(&prev)), "Processing...");
    }

    #[test]
    fn test_render_outcomes() {
        let ok = RequestOutcome::Success("No differences found.".into());
        assert_eq!(render_result(false, Some(&ok)), "No differences found.");

        let failed = RequestOutcome::Failure("Error processing images".into());
        assert_eq!(render_result(false, Some(&failed)), "Error processing images");
    }
}
