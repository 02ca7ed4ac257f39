//! Unified error type.

/// The error type returned by keiko's fallible operations.
///
/// Handlers return `Result<Response, Error>`. An `Err` is never written to
/// the wire as-is: dispatch logs it and renders the router's 500 page (or a
/// plain `500` when no custom page is registered). Expected HTTP outcomes
/// (a missing record, a bad form field) are expressed as
/// [`Response`](crate::Response) values, not as `Error`s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Binding a port or accepting a connection failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A template failed to render.
    #[error("template: {0}")]
    Template(#[from] askama::Error),

    /// A statement against the signup database failed.
    #[error("database: {0}")]
    Database(#[from] rusqlite::Error),

    /// An application-level failure with no finer-grained variant.
    #[error("{0}")]
    App(String),
}

impl Error {
    /// Shorthand for [`Error::App`].
    pub fn app(message: impl Into<String>) -> Self {
        Self::App(message.into())
    }
}
