//! Token authentication.
//!
//! The handler only needs a yes/no answer plus a payload to hand back on
//! rejection. [`RemoteAuthenticator`] gets that answer from an HTTP token
//! verification service; tests substitute in-memory implementations.

pub mod remote;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AuthError;

pub use remote::RemoteAuthenticator;

/// Verdict of the authenticator for one token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub authenticated: bool,
    /// Returned verbatim to the caller when `authenticated` is false.
    pub response: Value,
}

impl AuthOutcome {
    pub fn accepted(response: Value) -> Self {
        AuthOutcome {
            authenticated: true,
            response,
        }
    }

    pub fn rejected(response: Value) -> Self {
        AuthOutcome {
            authenticated: false,
            response,
        }
    }
}

/// Decides whether a caller-supplied token is allowed through.
///
/// A missing token must come back as a rejection, not an error. `Err` is
/// reserved for the authenticator itself failing.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: Option<&str>) -> Result<AuthOutcome, AuthError>;
}
