//! Omikuji demo — landing page plus result page.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example fortune
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/fortune_telling/
//!   curl http://localhost:3000/healthz

use keiko::fortune::{self, FortuneTeller};
use keiko::{Server, health};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = fortune::router(FortuneTeller::new())
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}
