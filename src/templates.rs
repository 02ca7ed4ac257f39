//! Askama templates.
//!
//! One struct per page, rendering the files under `templates/`. Handlers
//! build these, call `.render()`, and wrap the output in
//! [`Response::html`](crate::Response::html) — template selection stays a
//! compile-time fact instead of a runtime string.

use askama::Template;

use crate::forms::{ValidationForm, ViewForm};
use crate::signup::User;

// ── fortune ───────────────────────────────────────────────────────────────────

/// Omikuji landing page.
#[derive(Template)]
#[template(path = "fortune/index.html")]
pub struct FortuneIndexTemplate;

/// Omikuji result page. `fortune` is the drawn label.
#[derive(Template)]
#[template(path = "fortune/result.html")]
pub struct FortuneResultTemplate {
    pub fortune: &'static str,
}

// ── signup ────────────────────────────────────────────────────────────────────

/// Signup form page.
#[derive(Template)]
#[template(path = "signup/index.html")]
pub struct SignupIndexTemplate;

/// Signup result page, showing the saved user.
#[derive(Template)]
#[template(path = "signup/result.html")]
pub struct SignupResultTemplate {
    pub user: User,
}

// ── forms playground ──────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "forms/raw.html")]
pub struct RawFormTemplate;

#[derive(Template)]
#[template(path = "forms/raw_result.html")]
pub struct RawFormResultTemplate {
    pub text: String,
    pub checkbox: String,
    pub radio: String,
    pub select: String,
}

#[derive(Template)]
#[template(path = "forms/mapped.html")]
pub struct MappedFormTemplate;

#[derive(Template)]
#[template(path = "forms/mapped_result.html")]
pub struct MappedFormResultTemplate {
    pub text: String,
    pub checkbox: String,
    pub radio: String,
    pub select: String,
}

/// Form page driven by a [`ViewForm`] — empty on first visit, re-rendered
/// with the submitted values on the result page.
#[derive(Template)]
#[template(path = "forms/view.html")]
pub struct ViewFormTemplate {
    pub form: ViewForm,
}

#[derive(Template)]
#[template(path = "forms/view_result.html")]
pub struct ViewFormResultTemplate {
    pub form: ViewForm,
}

/// Validated form page; renders field errors when the submission was
/// rejected.
#[derive(Template)]
#[template(path = "forms/validation.html")]
pub struct ValidationFormTemplate {
    pub form: ValidationForm,
}

#[derive(Template)]
#[template(path = "forms/validation_result.html")]
pub struct ValidationResultTemplate {
    pub form: ValidationForm,
}

// ── pages ─────────────────────────────────────────────────────────────────────

/// The page that renders normally in the error-page playground.
#[derive(Template)]
#[template(path = "pages/hello.html")]
pub struct HelloTemplate;

/// Custom 404 page.
#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate;

/// Custom 500 page.
#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorTemplate;
