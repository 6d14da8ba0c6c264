use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use docuflow_api::routes::build_router;
use docuflow_api::state::AppState;
use docuflow_core::Config;
use docuflow_db::{CompanyRepository, EntityReferenceRepository, MembershipRepository};
use docuflow_services::{DocumentService, SystemClock};
use docuflow_storage::create_storage;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    docuflow_api::error::init_production_mode(config.is_production());

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("../docuflow-db/migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    let storage = create_storage(&config)
        .map_err(|e| anyhow::anyhow!("failed to initialize storage: {}", e))?;

    let documents = DocumentService::new(
        pool.clone(),
        storage,
        Arc::new(SystemClock),
        &config,
    );

    let state = Arc::new(AppState {
        companies: CompanyRepository::new(pool.clone()),
        memberships: MembershipRepository::new(pool.clone()),
        entity_references: EntityReferenceRepository::new(pool.clone()),
        documents,
        config: config.clone(),
    });

    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
