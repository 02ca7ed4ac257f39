//! The view-driven flow: the form struct owns rendering state.
//!
//! Both pages render the same input fields from a [`ViewForm`] — empty on
//! the form page, carrying the submitted values on the result page, with
//! checkboxes and selects re-marked. The templates ask the form which
//! options are active instead of re-deriving it inline.

use askama::Template;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::templates::{ViewFormResultTemplate, ViewFormTemplate};

use super::FormData;

/// Bound values for the playground form; drives the `view` templates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewForm {
    pub text: String,
    pub checkbox: Vec<String>,
    pub radio: String,
    pub select: String,
}

impl ViewForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            text: data.get("text").unwrap_or_default().to_owned(),
            checkbox: data.list("checkbox").iter().map(|v| (*v).to_owned()).collect(),
            radio: data.get("radio").unwrap_or_default().to_owned(),
            select: data.get("select").unwrap_or_default().to_owned(),
        }
    }

    /// Display form of the checkbox values.
    pub fn checkbox_joined(&self) -> String {
        self.checkbox.join(", ")
    }

    // Template predicates: which options should re-render as active.

    pub fn is_checked(&self, option: &str) -> bool {
        self.checkbox.iter().any(|v| v == option)
    }

    pub fn is_radio(&self, option: &str) -> bool {
        self.radio == option
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.select == option
    }
}

pub(super) async fn form(_req: Request) -> Result<Response, Error> {
    let page = ViewFormTemplate { form: ViewForm::default() };
    Ok(Response::html(page.render()?))
}

pub(super) async fn submit(req: Request) -> Result<Response, Error> {
    let form = ViewForm::from_data(&FormData::parse(req.body()));
    let page = ViewFormResultTemplate { form };
    Ok(Response::html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_submitted_values() {
        let data = FormData::parse(b"text=hi&checkbox=dog&checkbox=rabbit&radio=bread&select=banana");
        let form = ViewForm::from_data(&data);
        assert_eq!(form.text, "hi");
        assert!(form.is_checked("dog"));
        assert!(form.is_checked("rabbit"));
        assert!(!form.is_checked("cat"));
        assert!(form.is_radio("bread"));
        assert!(form.is_selected("banana"));
    }

    #[test]
    fn empty_form_marks_nothing() {
        let form = ViewForm::default();
        assert!(!form.is_checked("dog"));
        assert!(!form.is_radio("rice"));
        assert!(!form.is_selected("りんご"));
        assert_eq!(form.checkbox_joined(), "");
    }
}
