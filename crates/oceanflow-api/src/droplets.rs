//! Droplet endpoints

use crate::client::DoClient;
use crate::error::Result;
use crate::images::Image;
use crate::types::{Action, ActionRoot, Links, ListOptions, Meta, Region};
use serde::{Deserialize, Serialize};

impl DoClient {
    /// List droplets, one page at a time
    pub async fn list_droplets(&self, opts: ListOptions) -> Result<DropletPage> {
        self.get(&format!("/droplets?{}", opts.query())).await
    }

    /// Fetch a single droplet by numeric ID
    pub async fn get_droplet(&self, droplet_id: i64) -> Result<Droplet> {
        let root: DropletRoot = self.get(&format!("/droplets/{}", droplet_id)).await?;
        Ok(root.droplet)
    }

    /// Create a droplet from an image slug
    pub async fn create_droplet(&self, request: &DropletCreateRequest) -> Result<Droplet> {
        let root: DropletRoot = self.post("/droplets", request).await?;
        Ok(root.droplet)
    }

    pub async fn delete_droplet(&self, droplet_id: i64) -> Result<()> {
        self.delete(&format!("/droplets/{}", droplet_id)).await
    }

    /// Start a resize action; `disk` also grows the disk (irreversible)
    pub async fn resize_droplet(&self, droplet_id: i64, size: &str, disk: bool) -> Result<Action> {
        let body = DropletActionRequest {
            kind: "resize",
            size: Some(size.to_string()),
            disk: Some(disk),
            name: None,
        };
        let root: ActionRoot = self
            .post(&format!("/droplets/{}/actions", droplet_id), &body)
            .await?;
        Ok(root.action)
    }

    /// Start a snapshot action for a droplet
    pub async fn snapshot_droplet(&self, droplet_id: i64, name: &str) -> Result<Action> {
        let body = DropletActionRequest {
            kind: "snapshot",
            size: None,
            disk: None,
            name: Some(name.to_string()),
        };
        let root: ActionRoot = self
            .post(&format!("/droplets/{}/actions", droplet_id), &body)
            .await?;
        Ok(root.action)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droplet {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub memory: i64,
    #[serde(default)]
    pub vcpus: i64,
    #[serde(default)]
    pub disk: i64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub backup_ids: Vec<i64>,
    #[serde(default)]
    pub snapshot_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    #[serde(default)]
    pub size_slug: String,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV4 {
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV6 {
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub netmask: i64,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DropletCreateRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    /// Image slug, passed through as-is
    pub image: String,
}

/// One page of droplets with the pagination block the API attaches
#[derive(Debug, Clone, Deserialize)]
pub struct DropletPage {
    pub droplets: Vec<Droplet>,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Deserialize)]
struct DropletRoot {
    droplet: Droplet,
}

#[derive(Debug, Serialize)]
struct DropletActionRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_droplet_page_from_api_json() {
        let page: DropletPage = serde_json::from_str(
            r#"{
                "droplets": [
                    {
                        "id": 3164444,
                        "name": "example.com",
                        "memory": 1024,
                        "vcpus": 1,
                        "disk": 25,
                        "locked": false,
                        "status": "active",
                        "created_at": "2020-07-21T18:37:44Z",
                        "features": ["backups", "ipv6"],
                        "size_slug": "s-1vcpu-1gb",
                        "networks": {
                            "v4": [
                                {
                                    "ip_address": "104.236.32.182",
                                    "netmask": "255.255.192.0",
                                    "gateway": "104.236.0.1",
                                    "type": "public"
                                }
                            ],
                            "v6": []
                        },
                        "region": {"slug": "nyc3", "name": "New York 3", "available": true},
                        "tags": ["web"]
                    }
                ],
                "links": {"pages": {"last": "https://api.digitalocean.com/v2/droplets?page=3", "next": "https://api.digitalocean.com/v2/droplets?page=2"}},
                "meta": {"total": 64}
            }"#,
        )
        .unwrap();

        assert_eq!(page.droplets.len(), 1);
        assert_eq!(page.droplets[0].id, 3164444);
        assert_eq!(page.droplets[0].status, "active");
        assert_eq!(page.droplets[0].networks.v4[0].kind, "public");
        assert_eq!(page.meta.total, 64);
        assert!(page.links.pages.is_some());
    }

    #[test]
    fn test_create_request_uses_image_slug() {
        let request = DropletCreateRequest {
            name: "web-01".to_string(),
            region: "nyc3".to_string(),
            size: "s-1vcpu-1gb".to_string(),
            image: "ubuntu-22-04-x64".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["image"], "ubuntu-22-04-x64");
        assert_eq!(json["size"], "s-1vcpu-1gb");
    }

    #[test]
    fn test_resize_action_body_shape() {
        let body = DropletActionRequest {
            kind: "resize",
            size: Some("s-2vcpu-2gb".to_string()),
            disk: Some(true),
            name: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "resize");
        assert_eq!(json["size"], "s-2vcpu-2gb");
        assert_eq!(json["disk"], true);
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_snapshot_action_body_shape() {
        let body = DropletActionRequest {
            kind: "snapshot",
            size: None,
            disk: None,
            name: Some("nightly".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "snapshot");
        assert_eq!(json["name"], "nightly");
        assert!(json.get("size").is_none());
    }
}
