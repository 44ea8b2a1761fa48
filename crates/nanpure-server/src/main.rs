//! HTTP service exposing the puzzle solver.
//!
//! `GET /` returns a short banner. `POST /solve` accepts a puzzle grid as
//! JSON and returns its solution; see the [`solve`] module for the wire
//! contract.

use std::{io, net::SocketAddr};

use axum::{Router, routing::get};
use clap::Parser;
use tokio::net::TcpListener;

mod solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:8000")]
    listen: SocketAddr,
}

fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .nest(solve::PATH, solve::router())
}

#[allow(clippy::unused_async)]
async fn index() -> &'static str {
    "Sudoku Solver Backend"
}

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listener = TcpListener::bind(args.listen).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    log::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt as _;
    use tower::ServiceExt as _;

    use super::*;

    #[tokio::test]
    async fn test_index_returns_banner() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Sudoku Solver Backend");
    }
}
