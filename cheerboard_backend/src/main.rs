use anyhow::Result;
use cheerboard_backend::api;
use cheerboard_backend::bootstrap;
use cheerboard_backend::config::CheerboardConfig;
use cheerboard_backend::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Cheerboard backend daemon")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (Axum) for REST access
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let args = Args::parse();

    let config = CheerboardConfig::from_env()?;
    let resources = bootstrap::initialize(&config)?;
    tracing::info!(
        db_path = %config.paths.db_path.display(),
        database_initialized = resources.database_initialized,
        directories_created = ?resources.directories_created,
        "bootstrap complete"
    );

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => api::serve_http(config, resources.database).await,
    }
}
