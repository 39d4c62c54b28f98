mod config;
mod files;
mod http;
mod routing;
mod server;

use std::sync::Arc;

use config::Config;
use files::StaticFiles;
use http::request::Method;
use http::response::{ResponseBuilder, StatusCode};
use routing::HandlerRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut registry = HandlerRegistry::new();

    registry.register(Method::GET, "/err", |_request, sink| {
        let response = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body(b"Nothing is broken, this route just answers in plain text\n".to_vec())
            .build();
        sink.write_response(&response);
    });

    registry.register(Method::POST, "/echo", |request, sink| {
        let response = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body(request.body.clone().unwrap_or_default())
            .build();
        sink.write_response(&response);
    });

    let registry = Arc::new(registry);
    let statics = Arc::new(StaticFiles::new(&cfg.static_files));

    tokio::select! {
        res = server::listener::run(&cfg, registry, statics) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
