use gengs_server::{AppState, build_router, logger};

use gengs_auth::{JwtValidator, TokenIssuer};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up .env before reading any configuration
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = gengs_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = gengs_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gengs-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the store handle. A failure here is logged and the process keeps
    // running; user endpoints fail per operation until the store is back.
    info!("Connecting to store database: {}", config.database.name);
    let database = match gengs_db::connect(&config.database.uri, &config.database.name).await {
        Ok(db) => Some(db),
        Err(e) => {
            error!("Store connection failed, user endpoints will error: {}", e);
            None
        }
    };

    // JWT machinery from the shared secret
    let Some(ref secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let jwt_validator = Arc::new(JwtValidator::with_hs256(secret.as_bytes()));
    let token_issuer = Arc::new(TokenIssuer::with_hs256(
        secret.as_bytes(),
        config.auth.token_ttl_secs,
    ));

    // Build application state and router
    let state = AppState {
        database,
        jwt_validator,
        token_issuer,
        api: config.api.clone(),
    };
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server running on http://{}", actual_addr);

    // Serve until SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
