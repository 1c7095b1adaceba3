use book_management::{
    adapters::{in_memory::InMemoryBookStore, postgres::PostgresBookDao},
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
    config::AppConfig,
    ports::BookPort,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_management=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Initialize storage adapter
    let book_port: Arc<dyn BookPort> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            tracing::info!("Using PostgreSQL book storage");
            Arc::new(PostgresBookDao::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, books are kept in memory only");
            Arc::new(InMemoryBookStore::new())
        }
    };

    let service_deps = ServiceDependencies { book_port };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
