//! User signup: form page, save-and-redirect, result page.
//!
//! The classic create-then-show flow: `POST /save` writes one row and
//! answers with a redirect to `/result/{id}`, so a refresh of the result
//! page never re-submits the form.

mod store;

pub use store::{User, UserStore};

use std::sync::Arc;

use askama::Template;
use http::StatusCode;

use crate::error::Error;
use crate::forms::FormData;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::templates::{SignupIndexTemplate, SignupResultTemplate};

/// `GET /` — form page. `POST /save` — create + redirect.
/// `GET /result/{user_id}` — result page.
pub fn router(store: UserStore) -> Router {
    let store = Arc::new(store);
    let save_store = Arc::clone(&store);
    let result_store = store;

    Router::new()
        .get("/", index)
        .post("/save", move |req: Request| {
            let store = Arc::clone(&save_store);
            async move { save(req, &store).await }
        })
        .get("/result/{user_id}", move |req: Request| {
            let store = Arc::clone(&result_store);
            async move { result(req, &store).await }
        })
}

async fn index(_req: Request) -> Result<Response, Error> {
    Ok(Response::html(SignupIndexTemplate.render()?))
}

/// A submission without a `username` field is a malformed form post — `400`,
/// nothing inserted.
async fn save(req: Request, store: &UserStore) -> Result<Response, Error> {
    let data = FormData::parse(req.body());
    let Some(username) = data.get("username") else {
        return Ok(Response::status(StatusCode::BAD_REQUEST));
    };

    let id = store.insert(username)?;
    Ok(Response::redirect(&format!("/result/{id}")))
}

/// Unknown ids — including non-numeric path segments — read as `404`.
async fn result(req: Request, store: &UserStore) -> Result<Response, Error> {
    let Some(id) = req.param("user_id").and_then(|raw| raw.parse::<i64>().ok()) else {
        return Ok(Response::status(StatusCode::NOT_FOUND));
    };

    match store.get(id)? {
        Some(user) => Ok(Response::html(SignupResultTemplate { user }.render()?)),
        None => Ok(Response::status(StatusCode::NOT_FOUND)),
    }
}
