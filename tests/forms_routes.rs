//! End-to-end exercises of the four form-playground flows.

use http::StatusCode;
use keiko::{Request, Response, forms};

const SUBMISSION: &[(&str, &str)] = &[
    ("text", "hello world"),
    ("checkbox", "dog"),
    ("checkbox", "cat"),
    ("radio", "rice"),
    ("select", "りんご"),
];

fn body(response: &Response) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

// ── form pages ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_form_page_renders() {
    let app = forms::router();
    for path in ["/raw", "/mapped", "/view", "/validation"] {
        let response = app.dispatch(Request::get(path)).await;
        assert_eq!(response.status_code(), StatusCode::OK, "GET {path}");
        assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
    }
}

// ── raw ───────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn raw_submit_echoes_the_submission() {
    let app = forms::router();

    let response = app.dispatch(Request::post_form("/raw_post", SUBMISSION)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = body(&response);
    assert!(page.contains("hello world"));
    assert!(page.contains("dog, cat"));
    assert!(page.contains("rice"));
    assert!(page.contains("りんご"));
}

#[tokio::test]
async fn raw_submit_with_empty_body_echoes_blanks() {
    let app = forms::router();

    let response = app.dispatch(Request::post_form("/raw_post", &[])).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(body(&response).contains("生フォーム結果"));
}

#[tokio::test]
async fn get_on_raw_submit_redirects_to_the_form() {
    let app = forms::router();

    let response = app.dispatch(Request::get("/raw_post")).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), Some("/raw"));
}

// ── mapped ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn mapped_submit_echoes_the_typed_fields() {
    let app = forms::router();

    let response = app.dispatch(Request::post_form("/mapped_post", SUBMISSION)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = body(&response);
    assert!(page.contains("hello world"));
    assert!(page.contains("dog, cat"));
    assert!(page.contains("りんご"));
}

#[tokio::test]
async fn get_on_mapped_submit_redirects_to_the_form() {
    let app = forms::router();

    let response = app.dispatch(Request::get("/mapped_post")).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), Some("/mapped"));
}

// ── view ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn view_form_page_starts_unmarked() {
    let app = forms::router();

    let response = app.dispatch(Request::get("/view")).await;

    let page = body(&response);
    assert!(!page.contains("checked"));
    assert!(!page.contains("selected"));
}

#[tokio::test]
async fn view_submit_round_trips_values_into_the_form() {
    let app = forms::router();

    let response = app.dispatch(Request::post_form("/view_post", SUBMISSION)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = body(&response);
    assert!(page.contains(r#"value="hello world""#));
    assert!(page.contains(r#"value="dog" checked"#));
    assert!(page.contains(r#"value="cat" checked"#));
    assert!(!page.contains(r#"value="rabbit" checked"#));
    assert!(page.contains(r#"value="rice" checked"#));
    assert!(page.contains(r#"value="りんご" selected"#));
    assert!(page.contains("dog, cat"));
}

#[tokio::test]
async fn get_on_view_submit_redirects_to_the_form() {
    let app = forms::router();

    let response = app.dispatch(Request::get("/view_post")).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), Some("/view"));
}

// ── validation ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_renders_the_result_page() {
    let app = forms::router();

    let response = app
        .dispatch(Request::post_form(
            "/validation_post",
            &[("username", "alice"), ("user_id", "42")],
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = body(&response);
    assert!(page.contains("バリデーション結果"));
    assert!(page.contains("alice"));
    assert!(page.contains("42"));
}

#[tokio::test]
async fn invalid_submission_rerenders_the_form_with_errors() {
    let app = forms::router();

    let response = app
        .dispatch(Request::post_form("/validation_post", &[("username", "alice")]))
        .await;

    // Like any form framework: a rejected submission is still a 200,
    // the page itself carries the errors.
    assert_eq!(response.status_code(), StatusCode::OK);
    let page = body(&response);
    assert!(page.contains("バリデーションフォーム"));
    assert!(page.contains("user_id is required"));
    // The accepted field keeps its value.
    assert!(page.contains(r#"value="alice""#));
}

#[tokio::test]
async fn get_on_validation_submit_redirects_to_the_form() {
    let app = forms::router();

    let response = app.dispatch(Request::get("/validation_post")).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), Some("/validation"));
}
