//! Poemify CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use poemify::cli::{
    app::{load_merged_config, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    PoemOptions,
};
use poemify::domain::config::AppConfig;
use poemify::domain::poem::PoemStyle;
use poemify::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        style: cli.style.map(|s| PoemStyle::from(s).to_string()),
        clipboard: if cli.clipboard { Some(true) } else { None },
        download: if cli.download { Some(true) } else { None },
        download_dir: cli
            .download_dir
            .as_ref()
            .map(|d| d.to_string_lossy().to_string()),
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // A photo path is required outside of subcommands
    let photo = match cli.photo {
        Some(photo) => photo,
        None => {
            presenter.error("Missing photo. Usage: poemify <PHOTO> [OPTIONS]");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = PoemOptions {
        photo,
        style: config.style_or_default(),
        model: config.model_or_default().to_string(),
        clipboard: config.clipboard_or_default(),
        download: config.download_or_default(),
        download_dir: config.download_dir.as_ref().map(PathBuf::from),
        notify: config.notify_or_default(),
    };

    run_oneshot(options).await
}
