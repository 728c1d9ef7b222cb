//! Main app runner for one-shot mode

use std::env;
use std::process::ExitCode;

use crate::application::ports::{ConfigStore, Notifier, PhotoSource};
use crate::application::PoemWorkflow;
use crate::domain::config::AppConfig;
use crate::infrastructure::notification::create_notifier;
use crate::infrastructure::{
    ArboardClipboard, FsPhotoSource, FsPoemExporter, GeminiPoemGenerator, XdgConfigStore,
};

use super::args::PoemOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the one-shot photo-to-poem flow
pub async fn run_oneshot(options: PoemOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load API key from config or environment
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let source = FsPhotoSource::new();
    let generator = GeminiPoemGenerator::with_model(api_key, &options.model);
    let clipboard = ArboardClipboard::new();
    let exporter = match options.download_dir {
        Some(ref dir) => FsPoemExporter::with_dir(dir),
        None => FsPoemExporter::new(),
    };
    let notifier: Box<dyn Notifier> = create_notifier(options.notify);

    // Create workflow
    let workflow =
        PoemWorkflow::new(generator, clipboard, exporter, notifier).with_style(options.style);

    // Read the photo
    let photo = match source.read_photo(&options.photo).await {
        Ok(photo) => photo,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.info(&format!(
        "Photo: {} ({}, {})",
        options.photo.display(),
        photo.mime_type(),
        photo.human_readable_size()
    ));
    workflow.select_photo(photo);

    // Generate the poem
    presenter.start_spinner(&format!("Generating {} poem...", options.style));
    let poem = match workflow.generate().await {
        Ok(poem) => {
            presenter.spinner_success("Poem generated");
            poem
        }
        Err(e) => {
            presenter.spinner_fail("Generation failed");
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Output poem to stdout
    presenter.output(&poem);

    // Clipboard and file export failures are reported but not fatal:
    // the poem has already been printed
    if options.clipboard {
        match workflow.copy_poem().await {
            Ok(()) => presenter.info("Copied to clipboard"),
            Err(e) => presenter.warn(&e.to_string()),
        }
    }

    if options.download {
        match workflow.save_poem().await {
            Ok(path) => presenter.info(&format!("Saved to {}", path.display())),
            Err(e) => presenter.warn(&e.to_string()),
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set GEMINI_API_KEY environment variable or run 'poemify config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
