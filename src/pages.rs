//! Error-page playground: what a visitor sees when things go wrong.
//!
//! Three ingredients: a page that renders normally, a route that always
//! fails, and custom 404 / 500 templates wired into the router's error-page
//! slots. The failing handler never builds its own 500 — it returns `Err`
//! and lets dispatch route the failure, exactly like every other handler in
//! this crate would on a real fault.

use askama::Template;
use http::StatusCode;
use tracing::info;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::templates::{HelloTemplate, NotFoundTemplate, ServerErrorTemplate};

/// `GET /` — a page that renders normally. `GET /invalid` — a guaranteed
/// failure. Any other path hits the custom 404.
pub fn router() -> Router {
    Router::new()
        .get("/", hello)
        .get("/invalid", fail)
        .not_found(handle_404)
        .on_error(handle_500)
}

async fn hello(_req: Request) -> Result<Response, Error> {
    Ok(Response::html(HelloTemplate.render()?))
}

/// Fails unconditionally. The error message carries the request line so the
/// dispatch log tells the whole story.
async fn fail(req: Request) -> Result<Response, Error> {
    info!("about to fail");
    Err(Error::app(format!("sample failure for {} {}", req.method(), req.path())))
}

async fn handle_404(_req: Request) -> Result<Response, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .html(NotFoundTemplate.render()?))
}

async fn handle_500(_req: Request) -> Result<Response, Error> {
    Ok(Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .html(ServerErrorTemplate.render()?))
}
