//! The validated flow: required fields, with errors rendered back into the
//! form page.

use askama::Template;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::templates::{ValidationFormTemplate, ValidationResultTemplate};

use super::FormData;

/// A form with two required fields. Validation failures collect into
/// `errors`, which the form template lists above the fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationForm {
    pub username: String,
    pub user_id: String,
    pub errors: Vec<String>,
}

impl ValidationForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            username: data.get("username").unwrap_or_default().to_owned(),
            user_id: data.get("user_id").unwrap_or_default().to_owned(),
            errors: Vec::new(),
        }
    }

    /// Checks the required fields, replacing any previous error list.
    /// Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.username.trim().is_empty() {
            self.errors.push("username is required".to_owned());
        }
        if self.user_id.trim().is_empty() {
            self.errors.push("user_id is required".to_owned());
        }
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub(super) async fn form(_req: Request) -> Result<Response, Error> {
    let page = ValidationFormTemplate { form: ValidationForm::default() };
    Ok(Response::html(page.render()?))
}

/// An invalid submission re-renders the form page (still 200, like any
/// form framework) with the errors listed; a valid one renders the result
/// page.
pub(super) async fn submit(req: Request) -> Result<Response, Error> {
    let mut form = ValidationForm::from_data(&FormData::parse(req.body()));

    if !form.validate() {
        return Ok(Response::html(ValidationFormTemplate { form }.render()?));
    }

    Ok(Response::html(ValidationResultTemplate { form }.render()?))
}
