mod config;
mod http;
mod logging;
mod signals;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use axum::http::{HeaderValue, Method, header};
use clap::{Parser, Subcommand};
use lead_intake::LeadIntakeModule;
use lead_intake::infra::crm::HttpCrmClient;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::{AppConfig, CliOverrides, DatabaseConfig, ServerConfig};

/// Lead intake server - website contact form to CRM, with a database backup
#[derive(Parser)]
#[command(name = "lead-intake-server")]
#[command(about = "Lead intake server - website contact form to CRM, with a database backup")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON, secrets redacted) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite backup store
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        mock: cli.mock,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_redacted_json()?);
        return Ok(());
    }

    logging::init(&config.logging);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    info!("Checking configuration...");
    HttpCrmClient::new(&config.lead_intake.crm).context("invalid CRM configuration")?;
    let _ = cors_layer(&config.server)?;
    println!("Configuration is valid");
    println!("{}", config.to_redacted_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let started_at = Instant::now();
    info!(version = env!("CARGO_PKG_VERSION"), "Lead intake server starting");

    let db = connect_database(&config.database).await?;
    let module = LeadIntakeModule::init(&config.lead_intake, db.clone()).await?;

    let app = module
        .register_routes(http::router(db.clone(), started_at))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                error!(error = %e, "Signal handling failed, shutting down");
            }
        })
        .await
        .context("HTTP server failed")?;

    db.close().await.context("failed to close database")?;
    info!("Lead intake server stopped");
    Ok(())
}

async fn connect_database(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    // Every pooled connection to :memory: would open its own empty database
    if cfg.dsn.contains(":memory:") {
        opts.max_connections(1);
    }
    opts.sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database '{}'", cfg.redacted_dsn()))?;
    info!(dsn = %cfg.redacted_dsn(), "Connected to backup database");
    Ok(db)
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer> {
    let origins = server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
