use corrections_api::{handler::handle_from_env, telemetry};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

/// /api/editable_list — Return the editable list configuration for a version.
///
/// Accepts any method with a JSON body: `{"token": "...", "version": "..."}`.
/// See `corrections_api::handler` for the response contract.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    handle_from_env(&req).await
}
