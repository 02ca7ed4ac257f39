//! # keiko
//!
//! A handful of small web applications for learning the request → handler →
//! template flow, sharing one thin HTTP harness. Nothing more. Nothing less.
//!
//! ## The applications
//!
//! | Module | What it shows |
//! |---|---|
//! | [`fortune`] | An omikuji page: draw one of three luck labels, render it |
//! | [`hello`] | The smallest possible handler — plain text, no template |
//! | [`signup`] | A form backed by one SQLite table: save, redirect, show |
//! | [`forms`] | Four styles of form handling, from raw pairs to validation |
//! | [`pages`] | Custom 404 / 500 pages and a route that always fails |
//!
//! Each application exposes a `router()` constructor and nothing else of
//! consequence. The harness underneath (routing, dispatch, the server loop)
//! is exactly as large as these five apps require:
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//! - Per-request log lines via [`tracing`]
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use keiko::{fortune, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = fortune::router(fortune::FortuneTeller::new());
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```
//!
//! ## Exercising a router without a socket
//!
//! [`Router::dispatch`] is the same code path the server runs, so tests (and
//! curiosity) can drive an application in-process:
//!
//! ```rust,no_run
//! use keiko::{fortune, Request};
//! use keiko::fortune::{Fortune, FortuneTeller};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = fortune::router(FortuneTeller::fixed(Fortune::MajorLuck));
//!     let response = app.dispatch(Request::get("/fortune_telling/")).await;
//!     assert_eq!(response.status_code().as_u16(), 200);
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod fortune;
pub mod forms;
pub mod health;
pub mod hello;
pub mod pages;
pub mod signup;
pub mod templates;

pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
