//! Form playground demo — four renditions of the same form.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example forms
//!
//! Try:
//!   curl http://localhost:3000/raw
//!   curl -X POST http://localhost:3000/raw_post \
//!        -d 'text=hello&checkbox=dog&checkbox=cat&radio=rice'
//!   curl -i http://localhost:3000/raw_post        # GET → redirect to /raw
//!   curl -X POST http://localhost:3000/validation_post -d 'username=alice'

use keiko::{Server, forms, health};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = forms::router()
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}
