//! The omikuji application: draw a fortune, show it.
//!
//! The draw itself is the one piece of real logic in this crate, so it gets
//! the full treatment: a fixed, ordered set of outcomes and an injectable
//! draw strategy. Production wiring uses the thread-local RNG; tests inject
//! a fixed stand-in through the same constructor and watch it flow out of
//! the rendered page.

use std::fmt;
use std::sync::Arc;

use askama::Template;
use rand::Rng;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::templates::{FortuneIndexTemplate, FortuneResultTemplate};

/// One fortune outcome, ordered least to most favorable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fortune {
    MinorLuck,
    MediumLuck,
    MajorLuck,
}

impl Fortune {
    /// The fixed outcome sequence. Size and order never change while the
    /// process runs; [`FortuneTeller::new`] indexes into it uniformly.
    pub const ALL: [Fortune; 3] = [Fortune::MinorLuck, Fortune::MediumLuck, Fortune::MajorLuck];

    /// The label shown on the result page.
    pub fn label(self) -> &'static str {
        match self {
            Self::MinorLuck => "小吉",
            Self::MediumLuck => "中吉",
            Self::MajorLuck => "大吉",
        }
    }
}

impl fmt::Display for Fortune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The draw capability.
///
/// Holds a `Fn() -> Fortune` strategy behind an `Arc`, so cloning a teller
/// shares the strategy — the result handler clones one per request.
#[derive(Clone)]
pub struct FortuneTeller {
    draw: Arc<dyn Fn() -> Fortune + Send + Sync>,
}

impl FortuneTeller {
    /// The production teller: a uniform draw over [`Fortune::ALL`].
    ///
    /// Uses the thread-local RNG, so concurrent requests draw without any
    /// shared lock.
    pub fn new() -> Self {
        Self::with(|| {
            let index = rand::thread_rng().gen_range(0..Fortune::ALL.len());
            Fortune::ALL[index]
        })
    }

    /// A teller with an arbitrary draw strategy.
    pub fn with(draw: impl Fn() -> Fortune + Send + Sync + 'static) -> Self {
        Self { draw: Arc::new(draw) }
    }

    /// A teller that always returns `fortune`. For tests.
    pub fn fixed(fortune: Fortune) -> Self {
        Self::with(move || fortune)
    }

    /// Draws one fortune. Cannot fail; the only side effect is consuming
    /// entropy when the production strategy is in play.
    pub fn tell(&self) -> Fortune {
        (self.draw)()
    }
}

impl Default for FortuneTeller {
    fn default() -> Self {
        Self::new()
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

/// `GET /` — landing page. `GET /fortune_telling/` — draw once, render.
pub fn router(teller: FortuneTeller) -> Router {
    Router::new()
        .get("/", index)
        .get("/fortune_telling/", move |_req: Request| {
            let teller = teller.clone();
            async move { result(&teller).await }
        })
}

/// Landing page; no dynamic context.
async fn index(_req: Request) -> Result<Response, Error> {
    Ok(Response::html(FortuneIndexTemplate.render()?))
}

/// Result page: exactly one draw per request, label placed in the
/// template's `fortune` slot.
async fn result(teller: &FortuneTeller) -> Result<Response, Error> {
    let fortune = teller.tell();
    let page = FortuneResultTemplate { fortune: fortune.label() };
    Ok(Response::html(page.render()?))
}
