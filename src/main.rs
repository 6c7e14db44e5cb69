use clap::Parser;
use image_verse::{cli, config, error, gemini, interactive, orchestrator, scanner, session};
use cli::{Cli, Commands};
use config::Config;
use error::{ImageVerseError, Result};
use gemini::GeminiClient;
use orchestrator::Orchestrator;
use session::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "image_verse=debug,imageverse=debug"
    } else {
        "image_verse=warn,imageverse=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        match &e {
            ImageVerseError::Validation { notice } => eprintln!("⚠ {}", notice),
            _ => eprintln!("✖ {}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Ask { files, prompt, model, json } => {
            let files = scanner::select_files(&files)?;
            // 枚数不足の通知はAPIキーの有無より先に出す
            orchestrator::check_selection(&files, config.min_files())?;

            let orchestrator = build_orchestrator(&config, model)?;

            let mut state = AppState::new();
            state.set_files(files);
            state.set_prompt(prompt);

            let outcome = state.submit(&orchestrator).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", state.render());
            }
        }

        Commands::Interactive { folder, model } => {
            let orchestrator = build_orchestrator(&config, model)?;
            interactive::run_interactive(&folder, &orchestrator).await?;
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.api_base);
                println!("  最低枚数: {}", config.min_files());
                println!(
                    "  既定プロンプト: {}",
                    config.default_prompt.as_deref().unwrap_or("(なし)")
                );
                println!(
                    "  APIキー: {}",
                    if config.get_api_key().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}

/// クライアントは起動時に1回だけ作成して注入する
fn build_orchestrator(config: &Config, model: Option<String>) -> Result<Orchestrator> {
    let mut config = config.clone();
    if let Some(model) = model {
        config.model = model;
    }

    let client = GeminiClient::from_config(&config)?;
    Ok(Orchestrator::from_config(Arc::new(client), &config))
}
