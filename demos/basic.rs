//! Minimal standin example — a three-stage request chain behind hyper.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Try:
//!   curl -i http://localhost:3000/test              # real route
//!   curl -i http://localhost:3000/missing/logo.png  # placeholder: blank gif
//!   curl -i http://localhost:3000/404.json          # placeholder: {}
//!   curl -i http://localhost:3000/no-idea           # deferred → app 404

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use standin::{Config, Outcome, ServePlaceholder};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Built once, shared across every connection task.
    let placeholder = Arc::new(Config::new().skip_unknown(true).build());

    let listener = TcpListener::bind("0.0.0.0:3000").await.expect("bind failed");
    info!("listening on 0.0.0.0:3000");

    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(v) => v,
            Err(e) => {
                error!("accept error: {e}");
                continue;
            }
        };

        let placeholder = Arc::clone(&placeholder);
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let svc = service_fn(move |req| {
                let placeholder = Arc::clone(&placeholder);
                async move { chain(req, &placeholder).await }
            });

            if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                .serve_connection(io, svc)
                .await
            {
                error!(peer = %remote_addr, "connection error: {e}");
            }
        });
    }
}

/// The chain: one real route, then the placeholder engine, then whatever
/// the application calls a 404.
async fn chain(
    req: Request<hyper::body::Incoming>,
    placeholder: &ServePlaceholder,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if req.uri().path() == "/test" {
        return Ok(Response::new(Full::new(Bytes::from_static(b"Works!"))));
    }

    match placeholder.respond_to(&req) {
        Outcome::Handled(response) => Ok(response),
        Outcome::Deferred => {
            let mut response = Response::new(Full::new(Bytes::from_static(b"Unknown!")));
            *response.status_mut() = StatusCode::NOT_FOUND;
            Ok(response)
        }
    }
}
