#![warn(missing_docs)]
//! # ecg-classify-app binary
//!
//! Terminal entry point: loads record files from disk, submits them through
//! the workflow controller, and prints preview, results, and notifications.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ecg_classify_app::terminal::TerminalTarget;
use ecg_classify_app::{
    AppConfig, AppController, ENDPOINT_ENV_VAR, UiEvent, app_version, unix_timestamp_millis,
};
use ecg_classify_core::SelectedFile;
use tracing_subscriber::EnvFilter;

/// Upload an ECG record (.dat + .hea) for classification.
#[derive(Debug, Parser)]
#[command(name = "ecg-classify", version = ecg_classify_app::APP_VERSION)]
struct Cli {
    /// Prediction service base URL.
    #[arg(long, env = ENDPOINT_ENV_VAR)]
    endpoint: Option<String>,

    /// Query service health instead of submitting files.
    #[arg(long)]
    health: bool,

    /// Record files to submit.
    #[arg(required_unless_present = "health")]
    files: Vec<PathBuf>,
}

/// CLI entry point.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match AppConfig::resolve(cli.endpoint.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error.user_message());
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        stage = "startup",
        action = "config",
        version = app_version(),
        endpoint = %config.endpoint,
        "configuration resolved"
    );

    let client = match config.build_client() {
        Ok(client) => client,
        Err(error) => {
            eprintln!("{}", error.user_message());
            return ExitCode::FAILURE;
        }
    };

    if cli.health {
        return match client.check_health() {
            Ok(health) => {
                println!("{} ({}, version {})", health.message, health.status, health.version);
                if health.is_healthy() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(error) => {
                eprintln!("health check failed: {}", error.user_message());
                ExitCode::FAILURE
            }
        };
    }

    let mut files = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        match SelectedFile::from_path(path) {
            Ok(file) => files.push(file),
            Err(error) => {
                tracing::error!(stage = "intake", action = "read", path = %path.display(), error = %error, "cannot read file");
                eprintln!("cannot read {}: {error}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    let mut controller = AppController::new(client, TerminalTarget::stdout());
    controller.handle_event(UiEvent::FilesPicked(files), unix_timestamp_millis());
    if !controller.ui_state().can_submit() {
        return ExitCode::FAILURE;
    }

    controller.handle_event(UiEvent::SubmitClicked, unix_timestamp_millis());
    if controller.last_result().is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
