use anyhow::{Context, Result};
use newsroom_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ArticleRepositories, ServiceOptions},
};
use newsroom_core::config::AppConfig;
use newsroom_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleRevisionRepository,
        PostgresArticleTagRepository, PostgresArticleViewLogRepository,
        PostgresArticleWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let repos = ArticleRepositories {
        write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        tags: Arc::new(PostgresArticleTagRepository::new(pool.clone())),
        revisions: Arc::new(PostgresArticleRevisionRepository::new(pool.clone())),
        views: Arc::new(PostgresArticleViewLogRepository::new(pool)),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let options = ServiceOptions {
        workflow_policy: config.workflow_policy(),
        view_dedup_window: chrono::Duration::from_std(config.view_dedup_window())
            .context("view dedup window out of range")?,
    };
    tracing::info!(
        workflow = ?options.workflow_policy,
        dedup_window_secs = options.view_dedup_window.num_seconds(),
        "article services configured"
    );

    let services = Arc::new(ApplicationServices::new(repos, clock, slugger, options));
    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
