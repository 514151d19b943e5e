use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::store::RecordStore;

pub async fn run(cfg: &Config, store: RecordStore) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    // Bounds in-flight connections; store operations stay individually
    // atomic because every one opens and closes its own connection.
    let permits = Arc::new(Semaphore::new(cfg.server.max_connections));

    loop {
        let permit = permits.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let store = store.clone();
        let max_request_bytes = cfg.server.max_request_bytes;
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store, max_request_bytes);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}
