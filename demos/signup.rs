//! Signup demo — one SQLite table, save-and-redirect, result page.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example signup
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl -X POST http://localhost:3000/save -d 'username=alice'
//!   curl http://localhost:3000/result/1

use std::path::Path;

use keiko::signup::{self, UserStore};
use keiko::{Server, health};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let store = UserStore::open(Path::new("signup.db")).expect("failed to open signup.db");

    let app = signup::router(store)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}
