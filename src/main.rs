use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use composition_site::adapters::analytics::{InMemoryPageViewStore, PostgresPageViewStore};
use composition_site::adapters::content::{FileCompositionLoader, HttpCompositionLoader};
use composition_site::adapters::http::{
    build_router, AnalyticsAppState, ContentAppState, RouterOptions,
};
use composition_site::application::ContentStore;
use composition_site::config::{AnalyticsConfig, AppConfig, ContentConfig, ContentSource};
use composition_site::ports::{CompositionLoader, PageViewRecorder};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let loader = build_loader(&config.content)?;
    let store = Arc::new(ContentStore::new(loader));
    if let Err(e) = store.ensure_loaded().await {
        error!(error = %e, "Initial content load failed; serving empty catalog until refresh");
    }

    let analytics = build_recorder(&config.analytics)
        .await?
        .map(AnalyticsAppState::new);

    let options = RouterOptions {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
        record_all_requests: config.analytics.record_all_requests,
    };
    let router = build_router(ContentAppState::new(store), analytics, &options);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %addr,
        environment = ?config.server.environment,
        source = ?config.content.source,
        "Composition site listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_loader(config: &ContentConfig) -> Result<Arc<dyn CompositionLoader>, BoxError> {
    match config.source {
        ContentSource::Files => {
            info!(dir = %config.content_dir.display(), "Loading compositions from files");
            Ok(Arc::new(FileCompositionLoader::new(&config.content_dir)))
        }
        ContentSource::Http => {
            let http = config
                .http_loader_config()
                .ok_or("content.api_base_url is required for the http source")?;
            info!(base_url = %http.base_url, "Loading compositions from content API");
            Ok(Arc::new(HttpCompositionLoader::new(http)?))
        }
    }
}

async fn build_recorder(
    config: &AnalyticsConfig,
) -> Result<Option<Arc<dyn PageViewRecorder>>, BoxError> {
    if !config.enabled {
        info!("Page-view analytics disabled");
        return Ok(None);
    }

    let Some(url) = &config.database_url else {
        warn!("No analytics database configured, page views are kept in memory");
        return Ok(Some(Arc::new(InMemoryPageViewStore::new())));
    };

    let store = PostgresPageViewStore::connect_lazy(
        url.expose_secret(),
        config.max_connections,
        config.acquire_timeout(),
    )?;
    if config.run_migrations {
        if let Err(e) = store.ensure_schema().await {
            warn!(error = %e, "Could not create page_views table");
        }
    }
    Ok(Some(Arc::new(store)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        _ = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
