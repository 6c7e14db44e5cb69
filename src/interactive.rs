//! 対話モード
//!
//! 画像選択 → プロンプト入力 → 送信 → 結果表示 を繰り返す。

use crate::error::{ImageVerseError, Result};
use crate::orchestrator::Orchestrator;
use crate::scanner::{self, SelectedFile};
use crate::session::AppState;
use dialoguer::{Confirm, Input, MultiSelect};
use image_verse_common::messages::{EMPTY_PROMPT_HINT, RESULT_HEADER, TITLE};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub async fn run_interactive(folder: &Path, orchestrator: &Orchestrator) -> Result<()> {
    let candidates = scanner::scan_folder(folder)?;

    println!("{}\n", TITLE);
    println!("📂 {} ({}枚)", folder.display(), candidates.len());
    println!("** {}\n", EMPTY_PROMPT_HINT);

    let mut state = AppState::new();

    loop {
        state.set_files(select_images(&candidates)?);

        let prompt: String = Input::new()
            .with_prompt("Prompt")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ImageVerseError::CliExecution(e.to_string()))?;
        state.set_prompt(prompt);

        match state.begin(orchestrator) {
            Ok(submission) => {
                let spinner = processing_spinner(state.render());
                let outcome = orchestrator
                    .submit(&submission.files, &submission.prompt)
                    .await;
                spinner.finish_and_clear();

                match outcome {
                    Ok(outcome) => state.finish(outcome),
                    Err(e) => return Err(e),
                }
            }
            Err(ImageVerseError::Validation { notice }) => {
                // 送信していないので結果表示はそのまま
                println!("⚠ {}", notice);
            }
            Err(e) => return Err(e),
        }

        println!("\n{}\n{}\n", RESULT_HEADER, state.render());

        let again = Confirm::new()
            .with_prompt("Ask again?")
            .default(true)
            .interact()
            .map_err(|e| ImageVerseError::CliExecution(e.to_string()))?;
        if !again {
            break;
        }
    }

    Ok(())
}

fn select_images(candidates: &[SelectedFile]) -> Result<Vec<SelectedFile>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|f| format!("{} ({})", f.file_name, f.mime_type))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("画像を選択 (Space: 選択, Enter: 決定)")
        .items(&labels)
        .interact()
        .map_err(|e| ImageVerseError::CliExecution(e.to_string()))?;

    // 表示順（ファイル名順）で渡す
    Ok(picked_in_order(candidates, &chosen))
}

fn picked_in_order(candidates: &[SelectedFile], chosen: &[usize]) -> Vec<SelectedFile> {
    let mut indices = chosen.to_vec();
    indices.sort_unstable();
    indices.dedup();
    indices
        .into_iter()
        .filter_map(|i| candidates.get(i).cloned())
        .collect()
}

fn processing_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
