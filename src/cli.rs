use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imageverse")]
#[command(about = "画像とプロンプトをGeminiに送り、結果を表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像（PNG/JPEG）を送信して結果を表示
    Ask {
        /// 画像ファイル（指定順に送信）
        files: Vec<PathBuf>,

        /// プロンプト（省略時は空文字）
        #[arg(short, long, default_value = "")]
        prompt: String,

        /// モデルID（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に画像を選んで質問
    Interactive {
        /// 画像を選ぶフォルダ（デフォルト: カレント）
        #[arg(short, long, default_value = ".")]
        folder: PathBuf,

        /// モデルID（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定のモデルIDを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
