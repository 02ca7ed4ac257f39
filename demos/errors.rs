//! Error-page demo — custom 404 / 500 pages and a route that always fails.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example errors
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl -i http://localhost:3000/invalid    # handler fails → custom 500
//!   curl -i http://localhost:3000/nope       # route miss → custom 404

use keiko::{Server, health, pages};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = pages::router()
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}
