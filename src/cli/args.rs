//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::poem::PoemStyle;

/// Poemify - AI-powered photo to poem generation
#[derive(Parser, Debug)]
#[command(name = "poemify")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered photo to poem generation using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Photo to generate a poem from
    #[arg(value_name = "PHOTO")]
    pub photo: Option<PathBuf>,

    /// Poem style
    #[arg(short = 's', long, value_name = "STYLE")]
    pub style: Option<StyleArg>,

    /// Copy the poem to the clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Save the poem as poem.txt
    #[arg(short = 'd', long)]
    pub download: bool,

    /// Directory for the saved poem (with --download)
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Gemini model to use
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Style argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    FreeVerse,
    Haiku,
    Sonnet,
    Limerick,
    Ballad,
}

impl From<StyleArg> for PoemStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::FreeVerse => PoemStyle::FreeVerse,
            StyleArg::Haiku => PoemStyle::Haiku,
            StyleArg::Sonnet => PoemStyle::Sonnet,
            StyleArg::Limerick => PoemStyle::Limerick,
            StyleArg::Ballad => PoemStyle::Ballad,
        }
    }
}

impl From<PoemStyle> for StyleArg {
    fn from(style: PoemStyle) -> Self {
        match style {
            PoemStyle::FreeVerse => StyleArg::FreeVerse,
            PoemStyle::Haiku => StyleArg::Haiku,
            PoemStyle::Sonnet => StyleArg::Sonnet,
            PoemStyle::Limerick => StyleArg::Limerick,
            PoemStyle::Ballad => StyleArg::Ballad,
        }
    }
}

/// Parsed poem generation options (oneshot mode)
#[derive(Debug, Clone)]
pub struct PoemOptions {
    pub photo: PathBuf,
    pub style: PoemStyle,
    pub model: String,
    pub clipboard: bool,
    pub download: bool,
    pub download_dir: Option<PathBuf>,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "style",
    "clipboard",
    "download",
    "download_dir",
    "notify",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
