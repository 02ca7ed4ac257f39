//! The mapping-only flow: a struct whose single job is turning decoded
//! pairs into typed fields. Rendering still happens in the handler.

use askama::Template;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::templates::{MappedFormResultTemplate, MappedFormTemplate};

use super::FormData;

/// The typed view of one submission. Missing fields become their empty
/// defaults rather than errors — mapping, not validation.
#[derive(Debug, Default, PartialEq, Eq)]
struct MappedForm {
    text: String,
    checkbox: Vec<String>,
    radio: String,
    select: String,
}

impl MappedForm {
    fn from_data(data: &FormData) -> Self {
        Self {
            text: data.get("text").unwrap_or_default().to_owned(),
            checkbox: data.list("checkbox").iter().map(|v| (*v).to_owned()).collect(),
            radio: data.get("radio").unwrap_or_default().to_owned(),
            select: data.get("select").unwrap_or_default().to_owned(),
        }
    }
}

pub(super) async fn form(_req: Request) -> Result<Response, Error> {
    Ok(Response::html(MappedFormTemplate.render()?))
}

pub(super) async fn submit(req: Request) -> Result<Response, Error> {
    let form = MappedForm::from_data(&FormData::parse(req.body()));

    let page = MappedFormResultTemplate {
        text: form.text,
        checkbox: form.checkbox.join(", "),
        radio: form.radio,
        select: form.select,
    };

    Ok(Response::html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_field() {
        let data = FormData::parse(
            "text=hello+world&checkbox=dog&checkbox=cat&radio=rice&select=%E3%82%8A%E3%82%93%E3%81%94"
                .as_bytes(),
        );
        let form = MappedForm::from_data(&data);
        assert_eq!(form.text, "hello world");
        assert_eq!(form.checkbox, ["dog", "cat"]);
        assert_eq!(form.radio, "rice");
        assert_eq!(form.select, "りんご");
    }

    #[test]
    fn missing_fields_map_to_defaults() {
        let form = MappedForm::from_data(&FormData::parse(b""));
        assert_eq!(form, MappedForm::default());
    }
}
