use std::net::SocketAddr;

use auth::store::spawn_sweeper;
use gateway::handler::Handler;
use gateway::{Config, build_router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let handler = Handler::new(&config);

    // Expiry sweep runs on its own interval, decoupled from request handling
    spawn_sweeper(handler.auth.sessions.clone(), config.sweep_interval);

    let router = build_router(handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router).await.expect("Failed to start server");
}
