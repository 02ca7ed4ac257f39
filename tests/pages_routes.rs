//! End-to-end exercises of the error-page playground.

use http::StatusCode;
use keiko::{Request, Response, pages};

fn body(response: &Response) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

#[tokio::test]
async fn normal_page_renders() {
    let response = pages::router().dispatch(Request::get("/")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(body(&response).contains("こんにちは"));
}

#[tokio::test]
async fn failing_handler_renders_the_custom_500_page() {
    let response = pages::router().dispatch(Request::get("/invalid")).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body(&response);
    assert!(page.contains("サーバエラーが発生しました"));
    // The failure itself never leaks into the page.
    assert!(!page.contains("sample failure"));
}

#[tokio::test]
async fn route_miss_renders_the_custom_404_page() {
    let response = pages::router().dispatch(Request::get("/no-such-page")).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(body(&response).contains("ページが見つかりません"));
}

#[tokio::test]
async fn custom_pages_send_html() {
    let response = pages::router().dispatch(Request::get("/no-such-page")).await;
    assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
}
