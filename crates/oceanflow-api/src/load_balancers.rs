//! Load balancer endpoints
//!
//! Membership and rule changes go through dedicated sub-endpoints that
//! answer 204 instead of returning the balancer.

use crate::client::DoClient;
use crate::error::Result;
use crate::types::{ListOptions, Region};
use serde::{Deserialize, Serialize};

impl DoClient {
    pub async fn list_load_balancers(&self, opts: ListOptions) -> Result<Vec<LoadBalancer>> {
        let root: LoadBalancersRoot = self
            .get(&format!("/load_balancers?{}", opts.query()))
            .await?;
        Ok(root.load_balancers)
    }

    pub async fn get_load_balancer(&self, lb_id: &str) -> Result<LoadBalancer> {
        let root: LoadBalancerRoot = self.get(&format!("/load_balancers/{}", lb_id)).await?;
        Ok(root.load_balancer)
    }

    pub async fn create_load_balancer(&self, request: &LoadBalancerRequest) -> Result<LoadBalancer> {
        let root: LoadBalancerRoot = self.post("/load_balancers", request).await?;
        Ok(root.load_balancer)
    }

    /// Update replaces the whole configuration, not a diff
    pub async fn update_load_balancer(
        &self,
        lb_id: &str,
        request: &LoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        let root: LoadBalancerRoot = self
            .put(&format!("/load_balancers/{}", lb_id), request)
            .await?;
        Ok(root.load_balancer)
    }

    pub async fn delete_load_balancer(&self, lb_id: &str) -> Result<()> {
        self.delete(&format!("/load_balancers/{}", lb_id)).await
    }

    pub async fn add_droplets_to_load_balancer(
        &self,
        lb_id: &str,
        droplet_ids: &[i64],
    ) -> Result<()> {
        let body = DropletIdsBody {
            droplet_ids: droplet_ids.to_vec(),
        };
        self.post_no_content(&format!("/load_balancers/{}/droplets", lb_id), &body)
            .await
    }

    pub async fn remove_droplets_from_load_balancer(
        &self,
        lb_id: &str,
        droplet_ids: &[i64],
    ) -> Result<()> {
        let body = DropletIdsBody {
            droplet_ids: droplet_ids.to_vec(),
        };
        self.delete_with_body(&format!("/load_balancers/{}/droplets", lb_id), &body)
            .await
    }

    pub async fn add_forwarding_rules_to_load_balancer(
        &self,
        lb_id: &str,
        rules: &[ForwardingRule],
    ) -> Result<()> {
        let body = ForwardingRulesBody {
            forwarding_rules: rules.to_vec(),
        };
        self.post_no_content(&format!("/load_balancers/{}/forwarding_rules", lb_id), &body)
            .await
    }

    pub async fn remove_forwarding_rules_from_load_balancer(
        &self,
        lb_id: &str,
        rules: &[ForwardingRule],
    ) -> Result<()> {
        let body = ForwardingRulesBody {
            forwarding_rules: rules.to_vec(),
        };
        self.delete_with_body(&format!("/load_balancers/{}/forwarding_rules", lb_id), &body)
            .await
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub forwarding_rules: Vec<ForwardingRule>,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub droplet_ids: Vec<i64>,
    #[serde(default)]
    pub redirect_http_to_https: bool,
    #[serde(default)]
    pub enable_proxy_protocol: bool,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardingRule {
    pub entry_protocol: String,
    pub entry_port: i64,
    pub target_protocol: String,
    pub target_port: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate_id: String,
    #[serde(default)]
    pub tls_passthrough: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadBalancerRequest {
    pub name: String,
    pub algorithm: String,
    pub region: String,
    pub forwarding_rules: Vec<ForwardingRule>,
    pub droplet_ids: Vec<i64>,
    pub redirect_http_to_https: bool,
    pub enable_proxy_protocol: bool,
}

#[derive(Debug, Deserialize)]
struct LoadBalancersRoot {
    load_balancers: Vec<LoadBalancer>,
}

#[derive(Debug, Deserialize)]
struct LoadBalancerRoot {
    load_balancer: LoadBalancer,
}

#[derive(Debug, Serialize)]
struct DropletIdsBody {
    droplet_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct ForwardingRulesBody {
    forwarding_rules: Vec<ForwardingRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_rule() -> ForwardingRule {
        ForwardingRule {
            entry_protocol: "http".to_string(),
            entry_port: 80,
            target_protocol: "http".to_string(),
            target_port: 80,
            certificate_id: String::new(),
            tls_passthrough: false,
        }
    }

    #[test]
    fn test_forwarding_rule_omits_empty_certificate() {
        let json = serde_json::to_value(http_rule()).unwrap();
        assert_eq!(json["entry_protocol"], "http");
        assert_eq!(json["target_port"], 80);
        assert!(json.get("certificate_id").is_none());
    }

    #[test]
    fn test_forwarding_rule_keeps_certificate() {
        let rule = ForwardingRule {
            entry_protocol: "https".to_string(),
            entry_port: 443,
            target_protocol: "http".to_string(),
            target_port: 80,
            certificate_id: "892071a0-bb95-49bc-8021-3afd67a210bf".to_string(),
            tls_passthrough: false,
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["certificate_id"], "892071a0-bb95-49bc-8021-3afd67a210bf");
    }

    #[test]
    fn test_request_body_shape() {
        let request = LoadBalancerRequest {
            name: "web-lb".to_string(),
            algorithm: "round_robin".to_string(),
            region: "nyc3".to_string(),
            forwarding_rules: vec![http_rule()],
            droplet_ids: vec![3164444, 3164445],
            redirect_http_to_https: false,
            enable_proxy_protocol: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["algorithm"], "round_robin");
        assert_eq!(json["droplet_ids"][1], 3164445);
        assert_eq!(json["forwarding_rules"][0]["entry_port"], 80);
    }

    #[test]
    fn test_load_balancer_from_api_json() {
        let root: LoadBalancerRoot = serde_json::from_str(
            r#"{
                "load_balancer": {
                    "id": "4de7ac8b-495b-4884-9a69-1050c6793cd6",
                    "name": "example-lb-01",
                    "ip": "104.131.186.241",
                    "algorithm": "round_robin",
                    "status": "active",
                    "created_at": "2017-02-01T22:22:58Z",
                    "forwarding_rules": [
                        {
                            "entry_protocol": "http",
                            "entry_port": 80,
                            "target_protocol": "http",
                            "target_port": 80,
                            "certificate_id": "",
                            "tls_passthrough": false
                        }
                    ],
                    "region": {"slug": "nyc3", "name": "New York 3", "available": true},
                    "droplet_ids": [3164444, 3164445]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.load_balancer.name, "example-lb-01");
        assert_eq!(root.load_balancer.forwarding_rules.len(), 1);
        assert_eq!(root.load_balancer.droplet_ids, vec![3164444, 3164445]);
    }
}
