//! End-to-end exercises of the signup flow against an in-memory store.

use http::StatusCode;
use keiko::signup::{self, UserStore};
use keiko::{Request, Response, Router};

fn app() -> Router {
    signup::router(UserStore::open_in_memory().unwrap())
}

fn body(response: &Response) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

#[tokio::test]
async fn index_renders_the_form_page() {
    let response = app().dispatch(Request::get("/")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = body(&response);
    assert!(page.contains("ユーザ登録"));
    assert!(page.contains(r#"name="username""#));
}

#[tokio::test]
async fn save_inserts_and_redirects_to_the_result_page() {
    let app = app();

    let response = app
        .dispatch(Request::post_form("/save", &[("username", "alice")]))
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let location = response.header("location").expect("redirect location").to_owned();
    assert_eq!(location, "/result/1");

    let response = app.dispatch(Request::get(&location)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(body(&response).contains("alice"));
}

#[tokio::test]
async fn ids_grow_with_each_signup() {
    let app = app();

    app.dispatch(Request::post_form("/save", &[("username", "first")])).await;
    let response = app
        .dispatch(Request::post_form("/save", &[("username", "second")]))
        .await;

    assert_eq!(response.header("location"), Some("/result/2"));
}

#[tokio::test]
async fn save_without_username_is_a_bad_request() {
    let app = app();

    let response = app.dispatch(Request::post_form("/save", &[])).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Nothing was inserted.
    let response = app.dispatch(Request::get("/result/1")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_user_id_is_not_found() {
    let response = app().dispatch(Request::get("/result/99")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_user_id_is_not_found() {
    let response = app().dispatch(Request::get("/result/abc")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_on_the_save_route_is_not_routed() {
    let response = app().dispatch(Request::get("/save")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
