//! Error taxonomy for the editable list endpoint.
//!
//! Each collaborator has its own error enum. [`HandlerError`] gathers them so
//! the handler can propagate with `?` and convert every fault into a single
//! response at the top level.

use thiserror::Error;

/// Problems reading process configuration.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Failures talking to the token verification service.
///
/// A rejected token is not an error: it comes back as an
/// [`AuthOutcome`](crate::auth::AuthOutcome) with `authenticated == false`.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to build token verification client")]
    Client(#[source] reqwest::Error),

    #[error("token verification request failed")]
    Request(#[source] reqwest::Error),

    #[error("token verification service returned {status}: {body}")]
    Service { status: u16, body: String },
}

/// Failures reading from the shadow database.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to connect to shadow db")]
    Connect(#[source] sqlx::Error),

    #[error("shadow db query failed")]
    Query(#[source] sqlx::Error),
}

/// Anything that aborts an invocation without a structured response.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode response body")]
    Encode(#[from] serde_json::Error),

    #[error("failed to build response")]
    Response(#[from] http::Error),
}

/// Render an error followed by its `source()` chain, one cause per line.
///
/// A cause already quoted at the end of the previous line is skipped, since
/// wrappers such as `sqlx::Error` repeat their source in their own message.
pub fn diagnostic(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut previous = text.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let line = cause.to_string();
        if !previous.ends_with(&line) {
            text.push_str("\ncaused by: ");
            text.push_str(&line);
        }
        previous = line;
        source = cause.source();
    }
    text
}
