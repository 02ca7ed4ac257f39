//! Form-handling playground: four renditions of the same form.
//!
//! The form is fixed — a text field, a multi-value checkbox (dog / cat /
//! rabbit), a radio group (rice / bread) and a select (りんご / ばなな /
//! ぶどう / らいち). What varies is who owns the decoded body:
//!
//! | Flow | Decoding responsibility |
//! |---|---|
//! | [`raw`] | The handler reads [`FormData`] pairs directly |
//! | [`mapped`] | A struct maps pairs to typed fields, nothing else |
//! | [`view`] | The struct also drives rendering, round-tripping its values |
//! | [`validation`] | The struct validates and reports field errors |
//!
//! Every flow is a form page (`GET`) plus a submit route (`POST`). A `GET`
//! against a submit route bounces back to its form page with a redirect —
//! there is no session to stash results in, so submits render their result
//! page directly.

mod mapped;
mod raw;
mod validation;
mod view;

pub use validation::ValidationForm;
pub use view::ViewForm;

use crate::error::Error;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// All eight playground routes.
pub fn router() -> Router {
    Router::new()
        .get("/raw", raw::form)
        .post("/raw_post", raw::submit)
        .get("/raw_post", back_to("/raw"))
        .get("/mapped", mapped::form)
        .post("/mapped_post", mapped::submit)
        .get("/mapped_post", back_to("/mapped"))
        .get("/view", view::form)
        .post("/view_post", view::submit)
        .get("/view_post", back_to("/view"))
        .get("/validation", validation::form)
        .post("/validation_post", validation::submit)
        .get("/validation_post", back_to("/validation"))
}

/// Handler that redirects a stray `GET` on a submit route back to its form
/// page.
fn back_to(form_page: &'static str) -> impl Handler {
    move |_req: Request| async move { Ok::<_, Error>(Response::redirect(form_page)) }
}

// ── FormData ──────────────────────────────────────────────────────────────────

/// An `application/x-www-form-urlencoded` body decoded into ordered
/// `(name, value)` pairs.
///
/// Names may repeat (that is how checkboxes submit). [`FormData::get`]
/// returns the **last** value for a name, matching how browsers and query
/// strings resolve duplicates; [`FormData::list`] returns all of them in
/// submission order.
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// Decodes a request body. Undecodable byte runs are replaced, never
    /// rejected — a form post is best-effort input, not a protocol.
    pub fn parse(body: &[u8]) -> Self {
        let pairs = form_urlencoded::parse(body).into_owned().collect();
        Self { pairs }
    }

    /// Last value submitted under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All values submitted under `name`, in order.
    pub fn list(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}
