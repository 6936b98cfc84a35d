//! Floating IP endpoints
//!
//! Floating IPs are keyed by the address itself rather than an ID.

use crate::client::DoClient;
use crate::droplets::Droplet;
use crate::error::Result;
use crate::types::{Action, ActionRoot, ListOptions, Region};
use serde::{Deserialize, Serialize};

impl DoClient {
    pub async fn list_floating_ips(&self, opts: ListOptions) -> Result<Vec<FloatingIp>> {
        let root: FloatingIpsRoot = self.get(&format!("/floating_ips?{}", opts.query())).await?;
        Ok(root.floating_ips)
    }

    pub async fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp> {
        let root: FloatingIpRoot = self.get(&format!("/floating_ips/{}", ip)).await?;
        Ok(root.floating_ip)
    }

    /// Create a floating IP, either bound to a droplet or reserved in a region
    pub async fn create_floating_ip(
        &self,
        request: &FloatingIpCreateRequest,
    ) -> Result<FloatingIp> {
        let root: FloatingIpRoot = self.post("/floating_ips", request).await?;
        Ok(root.floating_ip)
    }

    pub async fn delete_floating_ip(&self, ip: &str) -> Result<()> {
        self.delete(&format!("/floating_ips/{}", ip)).await
    }

    /// Start an assign action pointing the IP at a droplet
    pub async fn assign_floating_ip(&self, ip: &str, droplet_id: i64) -> Result<Action> {
        let body = FloatingIpActionRequest {
            kind: "assign",
            droplet_id: Some(droplet_id),
        };
        let root: ActionRoot = self
            .post(&format!("/floating_ips/{}/actions", ip), &body)
            .await?;
        Ok(root.action)
    }

    /// Start an unassign action releasing the IP from its droplet
    pub async fn unassign_floating_ip(&self, ip: &str) -> Result<Action> {
        let body = FloatingIpActionRequest {
            kind: "unassign",
            droplet_id: None,
        };
        let root: ActionRoot = self
            .post(&format!("/floating_ips/{}/actions", ip), &body)
            .await?;
        Ok(root.action)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingIp {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub droplet: Option<Droplet>,
    #[serde(default)]
    pub locked: bool,
}

/// Creation body; exactly one of the two fields is set
#[derive(Debug, Clone, Serialize)]
pub struct FloatingIpCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub droplet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FloatingIpsRoot {
    floating_ips: Vec<FloatingIp>,
}

#[derive(Debug, Deserialize)]
struct FloatingIpRoot {
    floating_ip: FloatingIp,
}

#[derive(Debug, Serialize)]
struct FloatingIpActionRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    droplet_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_droplet_form() {
        let request = FloatingIpCreateRequest {
            droplet_id: Some(123456),
            region: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["droplet_id"], 123456);
        assert!(json.get("region").is_none());
    }

    #[test]
    fn test_create_request_region_form() {
        let request = FloatingIpCreateRequest {
            droplet_id: None,
            region: Some("ams3".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["region"], "ams3");
        assert!(json.get("droplet_id").is_none());
    }

    #[test]
    fn test_floating_ip_from_api_json() {
        let root: FloatingIpRoot = serde_json::from_str(
            r#"{
                "floating_ip": {
                    "ip": "45.55.96.47",
                    "droplet": null,
                    "region": {"slug": "nyc3", "name": "New York 3", "available": true},
                    "locked": false
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.floating_ip.ip, "45.55.96.47");
        assert!(root.floating_ip.droplet.is_none());
    }

    #[test]
    fn test_unassign_action_body_shape() {
        let body = FloatingIpActionRequest {
            kind: "unassign",
            droplet_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "unassign");
        assert!(json.get("droplet_id").is_none());
    }
}
