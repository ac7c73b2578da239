//! The Chesed Machine fetch service
//!
//! ## Usage
//!
//! ```bash
//! # Serve POST/GET /fetch-ideas for the widget or a webhook
//! chesed-fetch serve --bind 0.0.0.0:8787
//!
//! # Refresh once and exit (for cron and other schedulers)
//! chesed-fetch run
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use chesed_core::{refresh_idea_components, RestStore, SharedStore, SheetsClient};
use chesed_fetch::config::FetchConfig;
use chesed_fetch::{create_router, AppState};
use clap::{Parser, Subcommand};

/// The Chesed Machine - spreadsheet to store refresh
#[derive(Parser)]
#[command(name = "chesed-fetch")]
#[command(version = "0.1.0")]
#[command(about = "Refresh the Chesed Machine idea lists from the source spreadsheet")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the refresh endpoint over HTTP
    Serve {
        /// Address to bind (overrides CHESED_BIND_ADDR)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// Refresh once and exit
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = FetchConfig::from_env()?;
    let sheets = Arc::new(SheetsClient::new(config.sheets.clone()));
    let store: SharedStore = Arc::new(RestStore::new(config.store_url.clone(), config.store_key.clone()));

    match cli.command {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            let app = create_router(AppState { sheets, store });

            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Fetch service listening on {}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::Run => {
            let components = refresh_idea_components(&sheets, store.as_ref()).await?;
            println!(
                "Ideas updated: {} what, {} whom, {} when",
                components.what.len(),
                components.whom.len(),
                components.when_to.len()
            );
        }
    }

    Ok(())
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
