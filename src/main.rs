//! Lyra Mentor API server.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::sync::watch;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lyra_mentor::adapters::http::{build_api, ApiPorts};
use lyra_mentor::adapters::postgres::{
    self, PostgresAnalyticsEvents, PostgresLessonContent, PostgresProgressRepository,
    PostgresVariantRepository,
};
use lyra_mentor::adapters::{
    FileConsentStore, InMemoryAnalyticsStore, InMemoryLessonContent, InMemoryProgressRepository,
    InMemoryVariantRepository,
};
use lyra_mentor::application::{AnalyticsCollector, CollectorConfig};
use lyra_mentor::config::{AnalyticsConfig, AppConfig, LogFormat, LoggingConfig, ServerConfig};
use lyra_mentor::domain::foundation::{Clock, SystemClock};
use lyra_mentor::ports::AnalyticsEventWriter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let (ports, event_writer) = match &config.database {
        Some(database) => {
            tracing::info!(url = %database.redacted_url(), "Connecting to database");
            let pool = postgres::connect(database).await?;
            if database.applies_migrations() {
                postgres::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }
            let events = Arc::new(PostgresAnalyticsEvents::new(pool.clone()));
            let content = Arc::new(PostgresLessonContent::new(pool.clone()));
            let ports = ApiPorts {
                content_reader: content.clone(),
                content_writer: content,
                progress: Arc::new(PostgresProgressRepository::new(pool.clone())),
                events: events.clone(),
                variants: Arc::new(PostgresVariantRepository::new(pool)),
            };
            (ports, events as Arc<dyn AnalyticsEventWriter>)
        }
        None => {
            tracing::warn!("No database configured, serving from in-memory stores");
            let events = Arc::new(InMemoryAnalyticsStore::new());
            let content = Arc::new(InMemoryLessonContent::new());
            let ports = ApiPorts {
                content_reader: content.clone(),
                content_writer: content,
                progress: Arc::new(InMemoryProgressRepository::new()),
                events: events.clone(),
                variants: Arc::new(InMemoryVariantRepository::new()),
            };
            (ports, events as Arc<dyn AnalyticsEventWriter>)
        }
    };

    let collector = Arc::new(AnalyticsCollector::with_config(
        event_writer,
        Arc::new(FileConsentStore::new(&config.analytics.consent_file)),
        clock.clone(),
        collector_config(&config.analytics),
    ));
    let consent = collector.load_consent().await;
    tracing::info!(
        consent,
        session_id = %collector.session_id(),
        flush_interval_secs = config.analytics.flush_interval_secs,
        "Analytics collector ready"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let flusher = {
        let collector = collector.clone();
        tokio::spawn(async move { collector.run(shutdown_rx).await })
    };

    let app = build_api(ports, collector, clock)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Lyra Mentor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the collector only after in-flight requests have queued their events.
    if shutdown_tx.send(true).is_err() {
        tracing::warn!("Analytics collector already stopped");
    }
    if let Err(e) = flusher.await {
        tracing::error!(error = %e, "Analytics collector task failed");
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn collector_config(analytics: &AnalyticsConfig) -> CollectorConfig {
    CollectorConfig::default()
        .with_flush_interval(analytics.flush_interval())
        .with_max_flush_attempts(analytics.max_flush_attempts)
        .with_default_consent(analytics.default_consent)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
