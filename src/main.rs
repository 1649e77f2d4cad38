use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monster_spawner::infrastructure::AppState;
use monster_spawner::infrastructure::config::Config;
use monster_spawner::{db, server};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monster_spawner=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    let app = server::build_router(AppState::new(db));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("monster-spawner listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("HTTP server error");
}
