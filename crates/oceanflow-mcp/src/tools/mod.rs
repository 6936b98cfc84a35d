//! Tool handlers, one module per resource family
//!
//! Every handler takes the shared client plus its parameter struct and
//! answers through the uniform envelope. One API round trip per handler;
//! the exceptions are the image lookup fallback and the delete paths that
//! synthesize a confirmation message.

pub(crate) mod droplets;
pub(crate) mod firewalls;
pub(crate) mod floating_ips;
pub(crate) mod images;
pub(crate) mod kubernetes;
pub(crate) mod load_balancers;
pub(crate) mod registry;
pub(crate) mod snapshots;
pub(crate) mod volumes;

use crate::response;
use oceanflow_api::DoClient;
use serde_json::json;

/// Connectivity check against the account endpoint
pub(crate) async fn test_connection(client: &DoClient) -> Result<String, String> {
    client
        .get_account()
        .await
        .map_err(|e| response::failure("connection test", e))?;

    response::success(
        "connection test",
        &json!({
            "status": "connected",
            "message": "Successfully connected to DigitalOcean API",
        }),
    )
}
