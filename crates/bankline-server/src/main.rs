//! # Bankline Server
//!
//! Main entry point for the Bankline account service: loads configuration,
//! connects MySQL and Redis, wires the service stack, and serves the REST
//! API with graceful shutdown.

use bankline_config::{AppConfig, ConfigLoader, RedisConfig};
use bankline_core::{BanklineError, BanklineResult};
use bankline_repository::{create_pool, MySqlAccountStore};
use bankline_rest::{create_router, AppState};
use bankline_service::{
    cache::{parse_ttl, AccountCache, CacheBackend, RedisCacheBackend},
    AccountService, AccountServiceImpl,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Bankline Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> BanklineResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Wire the service stack
    let store = Arc::new(MySqlAccountStore::new(db_pool));
    let cache = build_cache(&config);
    let account_service: Arc<dyn AccountService> =
        Arc::new(AccountServiceImpl::new(store, cache));

    let app_state = AppState::new(account_service);
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BanklineError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BanklineError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the account cache from configuration.
///
/// Redis being unreachable or disabled never prevents startup; the service
/// runs with a no-op cache backend and serves everything from the store.
fn build_cache(config: &AppConfig) -> AccountCache {
    let backend: Arc<dyn CacheBackend> = match create_redis_backend(&config.redis) {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            warn!("Redis unavailable, running without cache: {}", e);
            Arc::new(RedisCacheBackend::disabled())
        }
    };

    let ttl = parse_ttl(&config.cache.ttl);
    AccountCache::new(backend, ttl)
}

fn create_redis_backend(config: &RedisConfig) -> BanklineResult<RedisCacheBackend> {
    if !config.enabled {
        info!("Redis disabled by configuration");
        return Ok(RedisCacheBackend::disabled());
    }

    let mut pool_config = deadpool_redis::Config::from_url(&config.url);
    pool_config.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size as usize));

    let pool = pool_config
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| BanklineError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    info!("Redis connection pool created for {}", config.url);
    Ok(RedisCacheBackend::new(Arc::new(pool)))
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bankline=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
