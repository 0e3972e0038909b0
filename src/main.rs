//! Event Review Service - Binary Entry Point

use std::env;
use std::sync::Arc;

use event_review::api::http::create_router;
use event_review::store::EventStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(EventStore::new());
    eprintln!("[Store] Using event file {}", store.file_path());

    if env::var("SEED_DEMO_DATA").map(|v| v == "1").unwrap_or(false) {
        match store.seed_demo(50) {
            Ok(0) => {}
            Ok(count) => eprintln!("[Store] Seeded {} demo events", count),
            Err(err) => eprintln!("[Store] Demo seed failed: {}", err),
        }
    }
    eprintln!("[Store] {} events loaded", store.len());

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("[Server] Listening on {}", addr);

    axum::serve(listener, create_router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    eprintln!("[Server] Shutting down");
}
