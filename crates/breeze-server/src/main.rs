use std::net::SocketAddr;
use std::sync::Arc;

use breeze_store::{MemoryStore, ReadingStore, SqliteStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Observability
    breeze_obs::init("breezed");

    // Config
    let cfg = breeze_config::AppConfig::load().unwrap_or_default();
    let http_bind = cfg.http_bind();

    // Store: on-disk when configured, otherwise volatile
    let store: Arc<dyn ReadingStore> = match cfg.sqlite_path() {
        Some(path) => match SqliteStore::open(&path) {
            Ok(store) => {
                tracing::info!(%path, "sqlite store opened");
                Arc::new(store)
            }
            Err(e) => {
                tracing::error!(error=?e, %path, "failed to open sqlite store, using memory");
                Arc::new(MemoryStore::new())
            }
        },
        None => Arc::new(MemoryStore::new()),
    };

    let (app, state) = breeze_server::build_app(store);

    let addr: SocketAddr = http_bind.parse().expect("Invalid HTTP bind address");
    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind TCP listener");

    // Mark ready just before serving
    breeze_server::set_ready(&state, true);

    tracing::info!(%addr, "HTTP server listening");
    axum::serve(listener, app).await.expect("server error");
}
