mod api;
mod commands;
mod config;
mod consts;
mod controller;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod pretty;
mod schedule;
mod session;
mod ui;

use crate::api::ApiClient;
use crate::api::types::Kernel;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Run without the TUI, logging events to the console.
        #[arg(long)]
        headless: bool,
    },
    /// Analyze a single URL and print the verdict
    Analyze {
        /// URL to classify
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Upload a training dataset (CSV)
    Upload {
        /// Path to the CSV file
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
    },
    /// Retrain the model and print the new metrics
    Train {
        /// Kernel to train with: rbf, linear, poly, or sigmoid
        #[arg(long, default_value = "rbf")]
        kernel: String,

        /// Regularization parameter C
        #[arg(long, default_value_t = 1.0)]
        c: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("URLSHIELD_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    // The config file is optional; a missing or unreadable one means defaults.
    let config = get_config_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| Config::load_from_file(&path).ok())
        .unwrap_or_default();

    let args = Args::parse();
    match args.command {
        Command::Start { headless } => {
            let session = setup_session(environment, config).await;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Analyze { url } => {
            let client = build_client(environment, &config);
            commands::analyze_once(&client, &url).await
        }
        Command::Upload { file } => {
            let client = build_client(environment, &config);
            commands::upload_once(&client, &file).await
        }
        Command::Train { kernel, c } => {
            let kernel = kernel.parse::<Kernel>().map_err(|_| {
                format!(
                    "Unknown kernel: {}. Expected rbf, linear, poly, or sigmoid.",
                    kernel
                )
            })?;
            let client = build_client(environment, &config);
            commands::train_once(&client, kernel, c).await
        }
    }
}

fn build_client(environment: Environment, config: &Config) -> ApiClient {
    ApiClient::with_base_url(environment, config.resolve_base_url(&environment))
}
