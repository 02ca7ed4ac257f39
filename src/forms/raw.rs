//! The raw flow: no form struct at all.
//!
//! The handler reads decoded pairs straight out of [`FormData`] and builds
//! the result context by hand. Instructive as the baseline the other three
//! flows improve on.

use askama::Template;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::templates::{RawFormResultTemplate, RawFormTemplate};

use super::FormData;

pub(super) async fn form(_req: Request) -> Result<Response, Error> {
    Ok(Response::html(RawFormTemplate.render()?))
}

/// Missing fields read as empty strings; multi-value fields are joined with
/// `", "` for display.
pub(super) async fn submit(req: Request) -> Result<Response, Error> {
    let data = FormData::parse(req.body());

    let page = RawFormResultTemplate {
        text: data.get("text").unwrap_or_default().to_owned(),
        checkbox: data.list("checkbox").join(", "),
        radio: data.get("radio").unwrap_or_default().to_owned(),
        select: data.get("select").unwrap_or_default().to_owned(),
    };

    Ok(Response::html(page.render()?))
}
