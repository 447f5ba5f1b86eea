use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use account_service::app;
use account_service::db;
use account_service::logging::{init_logging, LoggingConfig};
use account_service::state::AppState;

// Exit code used when the store cannot be initialized.
const EXIT_DB_INIT_FAILED: i32 = 4;

#[derive(Parser)]
#[command(name = "account-service", version = "1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Creates the database tables
    DbCreate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging(LoggingConfig::from_env());

    let cli = Cli::parse();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://accounts.db".to_string());

    let pool = match db::init_pool(&database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("{}: Cannot continue", err);
            process::exit(EXIT_DB_INIT_FAILED);
        }
    };

    if let Some(Command::DbCreate) = cli.command {
        db::create_schema(&pool).await?;
        println!("Database created");
        return Ok(());
    }

    if let Err(err) = db::create_schema(&pool).await {
        error!("{}: Cannot continue", err);
        process::exit(EXIT_DB_INIT_FAILED);
    }

    let app = app::create_app(AppState { pool });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("Account service running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
