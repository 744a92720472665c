//! User directory CLI - application entry point.

use std::sync::Arc;

use clap::Parser;

use common::{logging::init_tracing, StorageConfig};
use user_cli::{commands, Cli};
use user_service_lib::JsonStorage;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (also reads .env, so RUST_LOG may come from there)
    let config = match cli.storage {
        Some(path) => StorageConfig::from_env().with_path(path),
        None => StorageConfig::from_env(),
    };

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);
    tracing::debug!(path = %config.path.display(), "Configuration loaded");

    let storage = Arc::new(JsonStorage::from_config(&config));

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::run(cli.command, &storage, &mut stdout) {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        eprintln!("error: {}", e.user_message());
        std::process::exit(e.exit_code());
    }
}
