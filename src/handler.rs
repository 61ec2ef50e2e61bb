//! Request handling for `/api/editable_list`.
//!
//! Flow: parse body → authenticate token → look up version → shape response.
//! Every failure answers 400:
//!
//! - rejected token: the authenticator's payload as JSON
//! - unknown version: `{"message": "no version in shadow db"}`
//! - anything else: plain-text diagnostic (see [`FaultPolicy`])

use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info, warn};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::auth::{Authenticator, RemoteAuthenticator};
use crate::config::{FaultPolicy, Settings};
use crate::error::{diagnostic, HandlerError};
use crate::models::request::EditableListRequest;
use crate::store::{ConfigStore, PgShadowStore};

/// Body message when no row matches the requested version.
pub const NOT_FOUND_MESSAGE: &str = "no version in shadow db";

/// Body of a fault response under [`FaultPolicy::Redacted`].
pub const REDACTED_FAULT_MESSAGE: &str = "internal error";

/// Entry point used by the deployed function.
///
/// Configuration and collaborators are built per invocation, inside the
/// fault boundary.
pub async fn handle_from_env(req: &Request) -> Result<Response<Body>, Error> {
    let policy = FaultPolicy::from_env();

    let collaborators = Settings::from_env()
        .map_err(HandlerError::from)
        .and_then(|settings| {
            let authenticator = RemoteAuthenticator::new(&settings.auth)?;
            let store = PgShadowStore::new(&settings.shadow_db);
            Ok((authenticator, store))
        });

    match collaborators {
        Ok((authenticator, store)) => handle(req, &authenticator, &store, policy).await,
        Err(err) => fault_response(&err, policy),
    }
}

/// Handle one invocation against the given collaborators.
pub async fn handle<A, S>(
    req: &Request,
    authenticator: &A,
    store: &S,
    policy: FaultPolicy,
) -> Result<Response<Body>, Error>
where
    A: Authenticator + ?Sized,
    S: ConfigStore + ?Sized,
{
    info!(method = %req.method(), "editable list request received");

    match process(req, authenticator, store).await {
        Ok(response) => Ok(response),
        Err(err) => fault_response(&err, policy),
    }
}

async fn process<A, S>(
    req: &Request,
    authenticator: &A,
    store: &S,
) -> Result<Response<Body>, HandlerError>
where
    A: Authenticator + ?Sized,
    S: ConfigStore + ?Sized,
{
    let request = EditableListRequest::from_body(body_bytes(req.body()));

    let outcome = authenticator.authenticate(request.token.as_deref()).await?;
    if !outcome.authenticated {
        warn!("token rejected by authenticator");
        return json_response(StatusCode::BAD_REQUEST, &outcome.response);
    }
    debug!("token accepted");

    let Some(row) = store.fetch(request.version.as_deref()).await? else {
        warn!(version = ?request.version, "{NOT_FOUND_MESSAGE}");
        return json_response(
            StatusCode::BAD_REQUEST,
            &json!({ "message": NOT_FOUND_MESSAGE }),
        );
    };

    debug!(version = ?request.version, "editable list found");
    json_response(StatusCode::OK, &row)
}

fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    }
}

fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    payload: &T,
) -> Result<Response<Body>, HandlerError> {
    let body = serde_json::to_string(payload)?;

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

/// Log a fault with its full chain and turn it into a 400 plain-text reply.
pub fn fault_response(err: &HandlerError, policy: FaultPolicy) -> Result<Response<Body>, Error> {
    let detail = diagnostic(err);
    error!("{detail}");

    let body = match policy {
        FaultPolicy::Detailed => detail,
        FaultPolicy::Redacted => REDACTED_FAULT_MESSAGE.to_string(),
    };

    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::Text(body))?)
}
