//! Radix-tree request router and the dispatch path.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler. The only extras are the two error-page slots: a custom
//! not-found page and a custom server-error page, because "what does a
//! failure look like to the visitor" is part of an application, not of its
//! proxy.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use http::{Method, StatusCode};
use matchit::Router as MatchitRouter;
use tracing::{error, info};

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// One radix tree per HTTP method — O(path-length) lookup, no allocations on
/// the hot path. Build it once at startup; pass it to
/// [`Server::serve`](crate::Server::serve), or drive it directly with
/// [`Router::dispatch`] in tests. Each registration call returns `self` so
/// registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    not_found: Option<BoxedHandler>,
    server_error: Option<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), not_found: None, server_error: None }
    }

    /// Register a handler for `GET` on `path`. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax — `req.param("name")` retrieves
    /// them:
    ///
    /// ```rust,no_run
    /// # use keiko::{Request, Response, Router, Error};
    /// # async fn show_user(_: Request) -> Result<Response, Error> { Ok(Response::text("")) }
    /// # async fn signup_form(_: Request) -> Result<Response, Error> { Ok(Response::text("")) }
    /// Router::new()
    ///     .get("/", signup_form)
    ///     .get("/result/{user_id}", show_user);
    /// ```
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    /// Register a handler for `POST` on `path`. Returns `self` for chaining.
    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::POST, path, handler)
    }

    /// Register a handler for an arbitrary method + path pair.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Install a custom not-found page. Without one, a route miss answers
    /// with a bodyless `404`.
    pub fn not_found(mut self, handler: impl Handler) -> Self {
        self.not_found = Some(handler.into_boxed_handler());
        self
    }

    /// Install a custom server-error page, rendered whenever a handler
    /// returns `Err`. Without one, a failure answers with a bodyless `500`.
    pub fn on_error(mut self, handler: impl Handler) -> Self {
        self.server_error = Some(handler.into_boxed_handler());
        self
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Core hot path: routes one request and produces one response.
    ///
    /// This is the exact code the server runs per request, public so tests
    /// can exercise an application without opening a socket. All failures
    /// are absorbed here — route miss, handler error, even a failing error
    /// page — so the caller always gets a plain `Response` back.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        info!(%method, %path, "request");

        let response = match self.lookup(&method, &path) {
            Some((handler, params)) => {
                req.params = params;
                // The handler consumes the request; keep a copy for the
                // error page. Request clones are cheap.
                let spare = req.clone();
                match handler.call(req).await {
                    Ok(response) => response,
                    Err(e) => {
                        error!(%method, %path, error = %e, "handler failed");
                        self.error_page(
                            self.server_error.as_ref(),
                            spare,
                            StatusCode::INTERNAL_SERVER_ERROR,
                        )
                        .await
                    }
                }
            }
            None => {
                self.error_page(self.not_found.as_ref(), req, StatusCode::NOT_FOUND)
                    .await
            }
        };

        info!(
            %method,
            %path,
            status = response.status_code().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response"
        );
        response
    }

    /// Renders one of the two error-page slots, falling back to a bodyless
    /// status response when the slot is empty or the page itself fails.
    /// Never recurses.
    async fn error_page(
        &self,
        page: Option<&BoxedHandler>,
        req: Request,
        fallback: StatusCode,
    ) -> Response {
        let Some(handler) = page else {
            return Response::status(fallback);
        };
        match handler.call(req).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "error page failed");
                Response::status(fallback)
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    async fn ok(_req: Request) -> Result<Response, Error> {
        Ok(Response::text("ok"))
    }

    async fn boom(_req: Request) -> Result<Response, Error> {
        Err(Error::app("boom"))
    }

    #[tokio::test]
    async fn dispatches_to_registered_handler() {
        let router = Router::new().get("/", ok);
        let response = router.dispatch(Request::get("/")).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.body(), b"ok");
    }

    #[tokio::test]
    async fn path_params_reach_the_handler() {
        async fn echo(req: Request) -> Result<Response, Error> {
            Ok(Response::text(req.param("user_id").unwrap_or("none").to_owned()))
        }
        let router = Router::new().get("/result/{user_id}", echo);
        let response = router.dispatch(Request::get("/result/42")).await;
        assert_eq!(response.body(), b"42");
    }

    #[tokio::test]
    async fn route_miss_is_a_plain_404_by_default() {
        let router = Router::new().get("/", ok);
        let response = router.dispatch(Request::get("/missing")).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.body().is_empty());
    }

    #[tokio::test]
    async fn methods_route_independently() {
        let router = Router::new().get("/save", ok);
        let response = router.dispatch(Request::post_form("/save", &[])).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn custom_not_found_page_is_used() {
        async fn page(_req: Request) -> Result<Response, Error> {
            Ok(Response::builder().status(StatusCode::NOT_FOUND).html("<h1>迷子</h1>"))
        }
        let router = Router::new().get("/", ok).not_found(page);
        let response = router.dispatch(Request::get("/missing")).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(String::from_utf8_lossy(response.body()).contains("迷子"));
    }

    #[tokio::test]
    async fn handler_error_renders_the_error_page() {
        async fn page(_req: Request) -> Result<Response, Error> {
            Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .html("<h1>障害</h1>"))
        }
        let router = Router::new().get("/invalid", boom).on_error(page);
        let response = router.dispatch(Request::get("/invalid")).await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(String::from_utf8_lossy(response.body()).contains("障害"));
    }

    #[tokio::test]
    async fn failing_error_page_falls_back_to_bare_status() {
        let router = Router::new().get("/invalid", boom).on_error(boom);
        let response = router.dispatch(Request::get("/invalid")).await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().is_empty());
    }
}
