use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripapi::ThreadRngSource;
use tripapi_api::{ApiConfig, AppState, ConfigOverrides, build_app};

/// Trip API Server
///
/// Options left unset fall back to the config file, then to built-in defaults
/// (127.0.0.1:8000, log level info, Swagger UI on).
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "TRIPAPI_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "TRIPAPI_PORT")]
    port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "TRIPAPI_LOG_LEVEL")]
    log_level: Option<String>,

    /// Config file path
    #[arg(short, long, env = "TRIPAPI_CONFIG")]
    config_file: Option<PathBuf>,

    /// Disable Swagger UI
    #[arg(long, env = "TRIPAPI_DISABLE_SWAGGER")]
    disable_swagger: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            disable_swagger: self.disable_swagger,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The log level may come from the file, so load it before logging is up
    let loaded = cli
        .config_file
        .as_ref()
        .map(|path| (path, ApiConfig::load_from_file(path)));

    let mut config = match &loaded {
        Some((_, Ok(cfg))) => cfg.clone(),
        _ => ApiConfig::default(),
    };
    config.apply_overrides(cli.overrides());

    // Initialize logging
    let filter = format!(
        "tripapi_api={level},tripapi={level},tower_http=debug",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match loaded {
        Some((path, Ok(_))) => info!("Configuration loaded from: {}", path.display()),
        Some((_, Err(e))) => warn!(
            "Failed to load config file: {}. Using default configuration.",
            e
        ),
        None => {}
    }

    let addr = config.socket_addr()?;

    let state = AppState::new(Arc::new(ThreadRngSource::new()));
    let app = build_app(state, &config);

    // Start server
    info!("Starting server on: {}", addr);
    if config.enable_swagger {
        info!("Swagger UI: http://{}/swagger-ui", addr);
    }
    debug!(
        "CORS: allow_any_origin={}, allowed_origins={:?}",
        config.cors.allow_any_origin, config.cors.allowed_origins
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
