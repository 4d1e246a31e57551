//! Category API - Entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use category_api::config::{LoggingConfig, ServiceConfig};
use category_api::prelude::*;

/// Command-line arguments.
struct Args {
    /// Path to configuration file.
    config: Option<PathBuf>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut config = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    config = args.next().map(PathBuf::from);
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("category-api {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {other}");
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
            }
        }

        Self { config }
    }
}

fn print_help() {
    println!(
        r"Category API - task category REST service

USAGE:
    category-api [OPTIONS]

OPTIONS:
    -c, --config <PATH>    Path to configuration file (YAML)
    -h, --help             Print help information
    -v, --version          Print version information

ENVIRONMENT VARIABLES:
    CATEGORY_API_HOST          Listen host (default: 127.0.0.1)
    CATEGORY_API_PORT          Listen port (default: 3000)
    CATEGORY_API_AUTH_ENABLED  Require bearer tokens (default: true)
    CATEGORY_API_TOKENS        Comma-separated accepted tokens
    CATEGORY_API_LOG           Log filter (RUST_LOG takes precedence)

EXAMPLES:
    category-api --config /etc/category-api/config.yaml
    CATEGORY_API_TOKENS=secret category-api
"
    );
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| fmt::layer().json()))
        .with((!logging.json).then(fmt::layer))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ServiceConfig::from_yaml_file(path)?,
        None => ServiceConfig::default(),
    }
    .with_env_overrides();

    init_tracing(&config.logging);

    match &args.config {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("Using default configuration with environment overrides"),
    }

    let auth_provider = config.auth_provider()?;
    if !config.auth.enabled {
        tracing::warn!("Authentication is disabled; every request is accepted");
    }

    let tasks = Arc::new(InMemoryTaskRepository::new());
    let categories = Arc::new(InMemoryCategoryRepository::with_tasks(tasks));

    info!("Starting category-api v{}", env!("CARGO_PKG_VERSION"));

    ServerBuilder::new()
        .with_shared_auth_provider(auth_provider)
        .register(CategoryDescriptor::new(categories))
        .serve(&config.bind_addr())
        .await
}
