//! Cloud firewall endpoints
//!
//! Rule and membership changes answer 204; only create/update/get return
//! the firewall itself.

use crate::client::DoClient;
use crate::error::Result;
use crate::types::ListOptions;
use serde::{Deserialize, Serialize};

impl DoClient {
    pub async fn list_firewalls(&self, opts: ListOptions) -> Result<Vec<Firewall>> {
        let root: FirewallsRoot = self.get(&format!("/firewalls?{}", opts.query())).await?;
        Ok(root.firewalls)
    }

    pub async fn get_firewall(&self, firewall_id: &str) -> Result<Firewall> {
        let root: FirewallRoot = self.get(&format!("/firewalls/{}", firewall_id)).await?;
        Ok(root.firewall)
    }

    pub async fn create_firewall(&self, request: &FirewallRequest) -> Result<Firewall> {
        let root: FirewallRoot = self.post("/firewalls", request).await?;
        Ok(root.firewall)
    }

    /// Update replaces the whole rule set, not a diff
    pub async fn update_firewall(
        &self,
        firewall_id: &str,
        request: &FirewallRequest,
    ) -> Result<Firewall> {
        let root: FirewallRoot = self.put(&format!("/firewalls/{}", firewall_id), request).await?;
        Ok(root.firewall)
    }

    pub async fn delete_firewall(&self, firewall_id: &str) -> Result<()> {
        self.delete(&format!("/firewalls/{}", firewall_id)).await
    }

    pub async fn add_droplets_to_firewall(
        &self,
        firewall_id: &str,
        droplet_ids: &[i64],
    ) -> Result<()> {
        let body = DropletIdsBody {
            droplet_ids: droplet_ids.to_vec(),
        };
        self.post_no_content(&format!("/firewalls/{}/droplets", firewall_id), &body)
            .await
    }

    pub async fn remove_droplets_from_firewall(
        &self,
        firewall_id: &str,
        droplet_ids: &[i64],
    ) -> Result<()> {
        let body = DropletIdsBody {
            droplet_ids: droplet_ids.to_vec(),
        };
        self.delete_with_body(&format!("/firewalls/{}/droplets", firewall_id), &body)
            .await
    }

    pub async fn add_tags_to_firewall(&self, firewall_id: &str, tags: &[String]) -> Result<()> {
        let body = TagsBody { tags: tags.to_vec() };
        self.post_no_content(&format!("/firewalls/{}/tags", firewall_id), &body)
            .await
    }

    pub async fn remove_tags_from_firewall(&self, firewall_id: &str, tags: &[String]) -> Result<()> {
        let body = TagsBody { tags: tags.to_vec() };
        self.delete_with_body(&format!("/firewalls/{}/tags", firewall_id), &body)
            .await
    }

    pub async fn add_rules_to_firewall(
        &self,
        firewall_id: &str,
        rules: &FirewallRulesRequest,
    ) -> Result<()> {
        self.post_no_content(&format!("/firewalls/{}/rules", firewall_id), rules)
            .await
    }

    pub async fn remove_rules_from_firewall(
        &self,
        firewall_id: &str,
        rules: &FirewallRulesRequest,
    ) -> Result<()> {
        self.delete_with_body(&format!("/firewalls/{}/rules", firewall_id), rules)
            .await
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firewall {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(default)]
    pub outbound_rules: Vec<OutboundRule>,
    #[serde(default)]
    pub droplet_ids: Vec<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub pending_changes: Vec<PendingChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundRule {
    #[serde(default)]
    pub protocol: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ports: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<RuleTargets>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundRule {
    #[serde(default)]
    pub protocol: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ports: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<RuleTargets>,
}

/// Traffic endpoints a rule applies to, in either direction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTargets {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub droplet_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_uids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingChange {
    #[serde(default)]
    pub droplet_id: i64,
    #[serde(default)]
    pub removing: bool,
    #[serde(default)]
    pub status: String,
}

/// Create/update body; droplets and tags stay out of updates
#[derive(Debug, Clone, Serialize)]
pub struct FirewallRequest {
    pub name: String,
    pub inbound_rules: Vec<InboundRule>,
    pub outbound_rules: Vec<OutboundRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub droplet_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirewallRulesRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outbound_rules: Vec<OutboundRule>,
}

#[derive(Debug, Deserialize)]
struct FirewallsRoot {
    firewalls: Vec<Firewall>,
}

#[derive(Debug, Deserialize)]
struct FirewallRoot {
    firewall: Firewall,
}

#[derive(Debug, Serialize)]
struct DropletIdsBody {
    droplet_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct TagsBody {
    tags: Vec<String>,
}
