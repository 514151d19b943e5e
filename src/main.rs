use roster::config::Config;
use roster::server;
use roster::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // The table must exist before the first connection is accepted;
    // failing here aborts the process.
    let store = RecordStore::init(&cfg.store.db_path)?;

    tokio::select! {
        res = server::listener::run(&cfg, store) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
