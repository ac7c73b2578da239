#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use chesed_core::{AppConfig, WordSource};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, set from environment and command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the application configuration (set from command line or default)
pub fn app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// The Chesed Machine - random chesed idea generator
#[derive(Parser, Debug)]
#[command(name = "chesed-machine")]
#[command(about = "The Chesed Machine - generate an idea for a chesed you can do")]
struct Args {
    /// Data directory for local state (overrides CHESED_DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// CSV URL for the word lists (overrides CHESED_WORD_LIST_URL)
    #[arg(long)]
    word_list_url: Option<String>,

    /// Hosted store base URL (overrides CHESED_STORE_URL)
    #[arg(long)]
    store_url: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let mut config = AppConfig::from_env()?;
    apply_overrides(&mut config, args);
    config.validate()?;

    if config.store_url.is_none() {
        tracing::warn!("No store configured (CHESED_STORE_URL); counter and commitments stay in memory");
    }
    tracing::info!("Starting with data dir: {:?}", config.data_dir);

    let _ = APP_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("The Chesed Machine")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);

    Ok(())
}

/// Command-line flags win over the environment.
fn apply_overrides(config: &mut AppConfig, args: Args) {
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(url) = args.word_list_url {
        config.word_source = WordSource::Csv(url);
    }
    if let Some(url) = args.store_url {
        config.store_url = Some(url);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_url_flag_satisfies_store_word_source() {
        let mut config = AppConfig {
            word_source: WordSource::Store,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let args = Args::parse_from(["chesed-machine", "--store-url", "https://example.supabase.co"]);
        apply_overrides(&mut config, args);

        assert_eq!(config.store_url.as_deref(), Some("https://example.supabase.co"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_word_list_flag_switches_to_csv() {
        let mut config = AppConfig {
            word_source: WordSource::Store,
            ..AppConfig::default()
        };
        let args = Args::parse_from(["chesed-machine", "--word-list-url", "https://example.com/ideas.csv"]);
        apply_overrides(&mut config, args);

        assert_eq!(config.word_source, WordSource::Csv("https://example.com/ideas.csv".to_string()));
        assert!(config.validate().is_ok());
    }
}
