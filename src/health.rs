//! Liveness / readiness probe handlers.
//!
//! Not part of any sample app's story, but every demo wiring registers them
//! so the process can sit behind a supervisor or an ingress:
//!
//! ```rust,no_run
//! use keiko::{health, hello};
//!
//! let app = hello::router()
//!     .get("/healthz", health::liveness)
//!     .get("/readyz", health::readiness);
//! ```

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;

/// Liveness probe handler.
///
/// Always returns `200 OK` with body `"ok"`. If the process can respond to
/// HTTP at all, it is alive — this handler intentionally has no dependencies.
pub async fn liveness(_req: Request) -> Result<Response, Error> {
    Ok(Response::text("ok"))
}

/// Readiness probe handler (default implementation).
///
/// Returns `200 OK` with body `"ready"`. Replace it with your own handler if
/// an application must verify dependency health before accepting traffic.
pub async fn readiness(_req: Request) -> Result<Response, Error> {
    Ok(Response::text("ready"))
}
