use gatherly_shared::seed::seed_demo_data;
use gatherly_shared::store::memory::MemoryEventStore;
use log::info;
use std::sync::Arc;

mod error;
mod handlers;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Gatherly event service");

    let store = Arc::new(MemoryEventStore::new());
    seed_demo_data(store.as_ref()).await?;

    let app = routes::create_router_with_store(store, "/api");

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("Listening on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
