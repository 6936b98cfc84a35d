//! Floating IP tool handlers

use crate::params::{
    AssignFloatingIpParam, CreateFloatingIpParam, DeleteFloatingIpParam, GetFloatingIpParam,
    ListFloatingIpsParam, UnassignFloatingIpParam,
};
use crate::response;
use oceanflow_api::{DoClient, FloatingIpCreateRequest, ListOptions};

/// A positive droplet ID wins over the region; otherwise the IP is
/// reserved in the region.
fn create_request(region: Option<String>, droplet_id: Option<i64>) -> FloatingIpCreateRequest {
    match droplet_id {
        Some(id) if id > 0 => FloatingIpCreateRequest {
            droplet_id: Some(id),
            region: None,
        },
        _ => FloatingIpCreateRequest {
            droplet_id: None,
            region,
        },
    }
}

pub(crate) async fn list_floating_ips(
    client: &DoClient,
    param: ListFloatingIpsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let floating_ips = client
        .list_floating_ips(opts)
        .await
        .map_err(|e| response::failure("list_floating_ips", e))?;
    response::success("list_floating_ips", &floating_ips)
}

pub(crate) async fn get_floating_ip(
    client: &DoClient,
    param: GetFloatingIpParam,
) -> Result<String, String> {
    let floating_ip = client
        .get_floating_ip(&param.ip)
        .await
        .map_err(|e| response::failure("get_floating_ip", e))?;
    response::success("get_floating_ip", &floating_ip)
}

pub(crate) async fn create_floating_ip(
    client: &DoClient,
    param: CreateFloatingIpParam,
) -> Result<String, String> {
    let request = create_request(param.region, param.droplet_id);
    let floating_ip = client
        .create_floating_ip(&request)
        .await
        .map_err(|e| response::failure("create_floating_ip", e))?;
    response::success("create_floating_ip", &floating_ip)
}

pub(crate) async fn delete_floating_ip(
    client: &DoClient,
    param: DeleteFloatingIpParam,
) -> Result<String, String> {
    client
        .delete_floating_ip(&param.ip)
        .await
        .map_err(|e| response::failure("delete_floating_ip", e))?;
    response::status_message(
        "delete_floating_ip",
        format!("Floating IP {} deleted successfully", param.ip),
    )
}

pub(crate) async fn assign_floating_ip(
    client: &DoClient,
    param: AssignFloatingIpParam,
) -> Result<String, String> {
    let action = client
        .assign_floating_ip(&param.ip, param.droplet_id)
        .await
        .map_err(|e| response::failure("assign_floating_ip", e))?;
    response::success("assign_floating_ip", &action)
}

pub(crate) async fn unassign_floating_ip(
    client: &DoClient,
    param: UnassignFloatingIpParam,
) -> Result<String, String> {
    let action = client
        .unassign_floating_ip(&param.ip)
        .await
        .map_err(|e| response::failure("unassign_floating_ip", e))?;
    response::success("unassign_floating_ip", &action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_prefers_droplet() {
        let request = create_request(Some("nyc3".to_string()), Some(3164444));
        assert_eq!(request.droplet_id, Some(3164444));
        assert!(request.region.is_none());
    }

    #[test]
    fn test_create_request_falls_back_to_region() {
        let request = create_request(Some("ams3".to_string()), None);
        assert!(request.droplet_id.is_none());
        assert_eq!(request.region.as_deref(), Some("ams3"));

        // Non-positive droplet IDs do not count as an assignment target.
        let request = create_request(Some("ams3".to_string()), Some(0));
        assert!(request.droplet_id.is_none());
        assert_eq!(request.region.as_deref(), Some("ams3"));
    }
}
