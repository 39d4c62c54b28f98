use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::{Config, ServerConfig};
use crate::files::StaticFiles;
use crate::http::connection::Connection;
use crate::routing::HandlerRegistry;

/// A bound TCP listener with a fixed worker capacity.
///
/// A semaphore permit is taken per connection before it is handed to a
/// task, so at most `max_workers` connections are in flight; further
/// accepted sockets wait for a free slot. There is no admission control
/// beyond that and no per-connection timeout.
pub struct Listener {
    inner: TcpListener,
    workers: Arc<Semaphore>,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(&cfg.listen_addr)
            .await
            .with_context(|| format!("binding {}", cfg.listen_addr))?;

        info!(
            "Listening on {} with {} workers",
            cfg.listen_addr, cfg.max_workers
        );

        Ok(Self {
            inner,
            workers: Arc::new(Semaphore::new(cfg.max_workers)),
        })
    }

    /// The actual bound address, useful when the port was 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Accept connections until the listener fails.
    ///
    /// Accept errors are fatal and end the loop; errors inside a connection
    /// are logged and only cost that connection.
    pub async fn serve(
        self,
        registry: Arc<HandlerRegistry>,
        statics: Arc<StaticFiles>,
    ) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.inner.accept().await.context("accepting connection")?;

            let permit = self
                .workers
                .clone()
                .acquire_owned()
                .await
                .context("acquiring worker slot")?;

            let registry = registry.clone();
            let statics = statics.clone();

            tokio::spawn(async move {
                let _permit = permit;

                let mut conn = Connection::new(socket, registry, statics);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

pub async fn run(
    cfg: &Config,
    registry: Arc<HandlerRegistry>,
    statics: Arc<StaticFiles>,
) -> anyhow::Result<()> {
    Listener::bind(&cfg.server).await?.serve(registry, statics).await
}
