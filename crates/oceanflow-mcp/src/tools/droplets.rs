//! Droplet tool handlers
//!
//! The list response is reduced to id/name/status per entry so a large
//! fleet stays readable for the calling agent; everything else passes the
//! API payload through.

use crate::params::{
    CreateDropletParam, CreateDropletSnapshotParam, DeleteDropletParam, GetDropletParam,
    ListDropletsParam, ResizeDropletParam,
};
use crate::response;
use oceanflow_api::{DoClient, DropletCreateRequest, DropletPage, ListOptions};
use serde_json::json;

fn page_payload(page: &DropletPage, opts: ListOptions) -> serde_json::Value {
    let droplets: Vec<_> = page
        .droplets
        .iter()
        .map(|d| json!({"id": d.id, "name": d.name, "status": d.status}))
        .collect();

    json!({
        "droplets": droplets,
        "meta": {
            "total": page.meta.total,
            "page": opts.page,
            "per_page": opts.per_page,
            "pages": opts.pages(page.meta.total),
        },
        "links": page.links,
    })
}

pub(crate) async fn list_droplets(
    client: &DoClient,
    param: ListDropletsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let page = client
        .list_droplets(opts)
        .await
        .map_err(|e| response::failure("list_droplets", e))?;

    response::success("list_droplets", &page_payload(&page, opts))
}

pub(crate) async fn get_droplet(client: &DoClient, param: GetDropletParam) -> Result<String, String> {
    let droplet = client
        .get_droplet(param.droplet_id)
        .await
        .map_err(|e| response::failure("get_droplet", e))?;
    response::success("get_droplet", &droplet)
}

pub(crate) async fn create_droplet(
    client: &DoClient,
    param: CreateDropletParam,
) -> Result<String, String> {
    let request = DropletCreateRequest {
        name: param.name,
        region: param.region,
        size: param.size,
        image: param.image,
    };
    let droplet = client
        .create_droplet(&request)
        .await
        .map_err(|e| response::failure("create_droplet", e))?;
    response::success("create_droplet", &droplet)
}

pub(crate) async fn delete_droplet(
    client: &DoClient,
    param: DeleteDropletParam,
) -> Result<String, String> {
    client
        .delete_droplet(param.droplet_id)
        .await
        .map_err(|e| response::failure("delete_droplet", e))?;
    response::status_message(
        "delete_droplet",
        format!("Droplet {} deleted successfully", param.droplet_id),
    )
}

pub(crate) async fn resize_droplet(
    client: &DoClient,
    param: ResizeDropletParam,
) -> Result<String, String> {
    client
        .resize_droplet(param.droplet_id, &param.size, param.disk)
        .await
        .map_err(|e| response::failure("resize_droplet", e))?;
    response::status_message(
        "resize_droplet",
        format!("Droplet {} resize initiated", param.droplet_id),
    )
}

pub(crate) async fn create_droplet_snapshot(
    client: &DoClient,
    param: CreateDropletSnapshotParam,
) -> Result<String, String> {
    let action = client
        .snapshot_droplet(param.droplet_id, &param.name)
        .await
        .map_err(|e| response::failure("create_droplet_snapshot", e))?;
    response::success("create_droplet_snapshot", &action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_from_api() -> DropletPage {
        serde_json::from_value(json!({
            "droplets": [
                {"id": 3164444, "name": "web-01", "status": "active",
                 "memory": 1024, "vcpus": 1, "disk": 25, "size_slug": "s-1vcpu-1gb"},
                {"id": 3164445, "name": "web-02", "status": "off"}
            ],
            "links": {"pages": {"next": "https://api.digitalocean.com/v2/droplets?page=3",
                                "prev": "https://api.digitalocean.com/v2/droplets?page=1"}},
            "meta": {"total": 51}
        }))
        .unwrap()
    }

    #[test]
    fn test_page_payload_reduces_entries_to_id_name_status() {
        let payload = page_payload(&page_from_api(), ListOptions::resolve(Some(2), Some(25)));

        let droplets = payload["droplets"].as_array().unwrap();
        assert_eq!(droplets.len(), 2);
        assert_eq!(
            droplets[0],
            json!({"id": 3164444, "name": "web-01", "status": "active"})
        );
        // The full droplet body stays behind; only the reduced triple goes out.
        assert!(droplets[0].get("size_slug").is_none());
    }

    #[test]
    fn test_page_payload_carries_pagination_block() {
        let opts = ListOptions::resolve(Some(2), Some(25));
        let payload = page_payload(&page_from_api(), opts);

        assert_eq!(payload["meta"]["total"], 51);
        assert_eq!(payload["meta"]["page"], 2);
        assert_eq!(payload["meta"]["per_page"], 25);
        assert_eq!(payload["meta"]["pages"], 3);
        assert_eq!(
            payload["links"]["pages"]["next"],
            "https://api.digitalocean.com/v2/droplets?page=3"
        );
    }
}
