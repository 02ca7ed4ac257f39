//! The smallest possible application: one handler, no template.

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// `GET /` — plain text, status 200.
pub async fn hello_world(_req: Request) -> Result<Response, Error> {
    Ok(Response::text("Hello World"))
}

pub fn router() -> Router {
    Router::new().get("/", hello_world)
}
