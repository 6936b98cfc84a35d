//! Tool parameter definitions
//!
//! One struct per tool; field doc comments become the JSON schema
//! descriptions the calling agent sees. Pagination fields are optional
//! everywhere and resolve to page 1 / 25 entries when absent or out of
//! range.

use oceanflow_api::{ForwardingRule, InboundRule, OutboundRule, RuleTargets};
use schemars::JsonSchema;
use serde::Deserialize;

// ============================================================================
// Droplets
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDropletsParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDropletParam {
    /// ID of the droplet to retrieve
    pub droplet_id: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDropletParam {
    /// Name of the droplet
    pub name: String,
    /// Region slug (e.g., 'nyc3', 'sfo2')
    pub region: String,
    /// Size slug (e.g., 's-1vcpu-1gb')
    pub size: String,
    /// Image slug (e.g., 'ubuntu-22-04-x64')
    pub image: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDropletParam {
    /// ID of the droplet to delete
    pub droplet_id: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ResizeDropletParam {
    /// ID of the droplet to resize
    pub droplet_id: i64,
    /// New size slug (e.g., 's-2vcpu-2gb')
    pub size: String,
    /// Whether to resize disk (permanent, cannot be undone)
    #[serde(default)]
    pub disk: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDropletSnapshotParam {
    /// ID of the droplet to snapshot
    pub droplet_id: i64,
    /// Name for the snapshot
    pub name: String,
}

// ============================================================================
// Volumes
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListVolumesParam {
    /// Filter volumes by region (optional)
    pub region: Option<String>,
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetVolumeParam {
    /// ID of the volume to retrieve
    pub volume_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateVolumeParam {
    /// Name of the volume
    pub name: String,
    /// Region slug (e.g., 'nyc3', 'sfo2')
    pub region: String,
    /// Size of the volume in gigabytes
    pub size_gigabytes: i64,
    /// Description of the volume (optional)
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteVolumeParam {
    /// ID of the volume to delete
    pub volume_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AttachVolumeParam {
    /// ID of the volume to attach
    pub volume_id: String,
    /// ID of the droplet to attach to
    pub droplet_id: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DetachVolumeParam {
    /// ID of the volume to detach
    pub volume_id: String,
    /// ID of the droplet to detach from
    pub droplet_id: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ResizeVolumeParam {
    /// ID of the volume to resize
    pub volume_id: String,
    /// New size in gigabytes
    pub size_gigabytes: i64,
    /// Region slug
    pub region: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateVolumeSnapshotParam {
    /// ID of the volume to snapshot
    pub volume_id: String,
    /// Name for the snapshot
    pub name: String,
    /// Description of the snapshot (optional)
    pub description: Option<String>,
}

// ============================================================================
// Snapshots
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSnapshotsParam {
    /// Filter by resource type: 'droplet' or 'volume' (optional)
    pub resource_type: Option<String>,
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListVolumeSnapshotsParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDropletSnapshotsParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSnapshotParam {
    /// ID of the snapshot to retrieve
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteSnapshotParam {
    /// ID of the snapshot to delete
    pub snapshot_id: String,
}

// ============================================================================
// Images
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListImagesParam {
    /// Image type: 'distribution', 'application', 'user' (optional)
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetImageParam {
    /// ID or slug of the image to retrieve
    pub image_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateImageParam {
    /// ID of the image to update
    pub image_id: String,
    /// New name for the image
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteImageParam {
    /// ID of the image to delete
    pub image_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferImageParam {
    /// ID of the image to transfer
    pub image_id: String,
    /// Region slug to transfer to
    pub region_slug: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConvertImageToSnapshotParam {
    /// ID of the image to convert
    pub image_id: String,
}

// ============================================================================
// Floating IPs
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFloatingIpsParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFloatingIpParam {
    /// Floating IP address
    pub ip: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateFloatingIpParam {
    /// Region slug for reserved IP (required if no droplet_id)
    pub region: Option<String>,
    /// Droplet ID to assign to (optional)
    pub droplet_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteFloatingIpParam {
    /// Floating IP address to delete
    pub ip: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AssignFloatingIpParam {
    /// Floating IP address
    pub ip: String,
    /// Droplet ID to assign to
    pub droplet_id: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UnassignFloatingIpParam {
    /// Floating IP address to unassign
    pub ip: String,
}

// ============================================================================
// Load balancers
// ============================================================================

/// One forwarding rule in a load balancer configuration
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ForwardingRuleArg {
    /// Protocol traffic enters with: 'http', 'https', 'http2', 'tcp', 'udp'
    pub entry_protocol: String,
    /// Port traffic enters on
    pub entry_port: i64,
    /// Protocol used towards the droplets
    pub target_protocol: String,
    /// Port used towards the droplets
    pub target_port: i64,
    /// Certificate ID for TLS termination (optional)
    pub certificate_id: Option<String>,
    /// Pass TLS through to the droplets instead of terminating
    #[serde(default)]
    pub tls_passthrough: bool,
}

impl From<ForwardingRuleArg> for ForwardingRule {
    fn from(arg: ForwardingRuleArg) -> Self {
        ForwardingRule {
            entry_protocol: arg.entry_protocol,
            entry_port: arg.entry_port,
            target_protocol: arg.target_protocol,
            target_port: arg.target_port,
            certificate_id: arg.certificate_id.unwrap_or_default(),
            tls_passthrough: arg.tls_passthrough,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListLoadBalancersParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetLoadBalancerParam {
    /// ID of the load balancer
    pub load_balancer_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateLoadBalancerParam {
    /// Name of the load balancer
    pub name: String,
    /// Load balancing algorithm: 'round_robin', 'least_connections'
    pub algorithm: String,
    /// Region slug
    pub region: String,
    /// Forwarding rules configuration
    pub forwarding_rules: Vec<ForwardingRuleArg>,
    /// Droplet IDs to add (optional)
    pub droplet_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateLoadBalancerParam {
    /// ID of the load balancer
    pub load_balancer_id: String,
    /// Name of the load balancer
    pub name: String,
    /// Load balancing algorithm
    pub algorithm: String,
    /// Region slug
    pub region: String,
    /// Forwarding rules configuration
    pub forwarding_rules: Vec<ForwardingRuleArg>,
    /// Droplet IDs (optional)
    pub droplet_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteLoadBalancerParam {
    /// ID of the load balancer to delete
    pub load_balancer_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddDropletsToLoadBalancerParam {
    /// ID of the load balancer
    pub load_balancer_id: String,
    /// Droplet IDs to add
    pub droplet_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveDropletsFromLoadBalancerParam {
    /// ID of the load balancer
    pub load_balancer_id: String,
    /// Droplet IDs to remove
    pub droplet_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddForwardingRulesToLoadBalancerParam {
    /// ID of the load balancer
    pub load_balancer_id: String,
    /// Forwarding rules to add
    pub forwarding_rules: Vec<ForwardingRuleArg>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveForwardingRulesFromLoadBalancerParam {
    /// ID of the load balancer
    pub load_balancer_id: String,
    /// Forwarding rules to remove
    pub forwarding_rules: Vec<ForwardingRuleArg>,
}

// ============================================================================
// Firewalls
// ============================================================================

/// Traffic endpoints a firewall rule applies to
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RuleTargetsArg {
    /// IPv4 addresses or CIDR blocks
    #[serde(default)]
    pub addresses: Vec<String>,
    /// Droplet IDs
    #[serde(default)]
    pub droplet_ids: Vec<i64>,
    /// Load balancer UIDs
    #[serde(default)]
    pub load_balancer_uids: Vec<String>,
    /// Droplet tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<RuleTargetsArg> for RuleTargets {
    fn from(arg: RuleTargetsArg) -> Self {
        RuleTargets {
            addresses: arg.addresses,
            droplet_ids: arg.droplet_ids,
            load_balancer_uids: arg.load_balancer_uids,
            tags: arg.tags,
        }
    }
}

/// One inbound firewall rule
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InboundRuleArg {
    /// Protocol: 'tcp', 'udp' or 'icmp'
    pub protocol: String,
    /// Port or port range (e.g., '80', '8000-9000'); empty for icmp
    pub ports: Option<String>,
    /// Where the traffic may come from
    pub sources: Option<RuleTargetsArg>,
}

impl From<InboundRuleArg> for InboundRule {
    fn from(arg: InboundRuleArg) -> Self {
        InboundRule {
            protocol: arg.protocol,
            ports: arg.ports.unwrap_or_default(),
            sources: arg.sources.map(Into::into),
        }
    }
}

/// One outbound firewall rule
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OutboundRuleArg {
    /// Protocol: 'tcp', 'udp' or 'icmp'
    pub protocol: String,
    /// Port or port range (e.g., '80', '8000-9000'); empty for icmp
    pub ports: Option<String>,
    /// Where the traffic may go
    pub destinations: Option<RuleTargetsArg>,
}

impl From<OutboundRuleArg> for OutboundRule {
    fn from(arg: OutboundRuleArg) -> Self {
        OutboundRule {
            protocol: arg.protocol,
            ports: arg.ports.unwrap_or_default(),
            destinations: arg.destinations.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFirewallsParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateFirewallParam {
    /// Name of the firewall
    pub name: String,
    /// Inbound rules configuration
    pub inbound_rules: Vec<InboundRuleArg>,
    /// Outbound rules configuration
    pub outbound_rules: Vec<OutboundRuleArg>,
    /// Droplet IDs to assign (optional)
    pub droplet_ids: Option<Vec<i64>>,
    /// Tags to assign (optional)
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Name of the firewall
    pub name: String,
    /// Inbound rules configuration
    pub inbound_rules: Vec<InboundRuleArg>,
    /// Outbound rules configuration
    pub outbound_rules: Vec<OutboundRuleArg>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteFirewallParam {
    /// ID of the firewall to delete
    pub firewall_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddDropletsToFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Droplet IDs to add
    pub droplet_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveDropletsFromFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Droplet IDs to remove
    pub droplet_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddTagsToFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Tags to add
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveTagsFromFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Tags to remove
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddRulesToFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Inbound rules to add (optional)
    #[serde(default)]
    pub inbound_rules: Vec<InboundRuleArg>,
    /// Outbound rules to add (optional)
    #[serde(default)]
    pub outbound_rules: Vec<OutboundRuleArg>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveRulesFromFirewallParam {
    /// ID of the firewall
    pub firewall_id: String,
    /// Inbound rules to remove (optional)
    #[serde(default)]
    pub inbound_rules: Vec<InboundRuleArg>,
    /// Outbound rules to remove (optional)
    #[serde(default)]
    pub outbound_rules: Vec<OutboundRuleArg>,
}

// ============================================================================
// Container registry
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRegistryParam {
    /// Name of the registry
    pub registry_name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListRepositoriesParam {
    /// Name of the registry
    pub registry_name: String,
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRepositoryParam {
    /// Name of the registry
    pub registry_name: String,
    /// Name of the repository
    pub repository_name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListRepositoryTagsParam {
    /// Name of the registry
    pub registry_name: String,
    /// Name of the repository
    pub repository_name: String,
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

// ============================================================================
// Kubernetes
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListK8sClustersParam {
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetK8sClusterParam {
    /// ID of the cluster
    pub cluster_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateK8sClusterParam {
    /// Name of the cluster
    pub name: String,
    /// Region slug (e.g., 'nyc3', 'sfo2')
    pub region: String,
    /// Kubernetes version (e.g., '1.28.2-do.0')
    pub version: String,
    /// Node pool size (e.g., 's-2vcpu-2gb')
    pub node_pool_size: String,
    /// Number of nodes in the pool
    pub node_count: i64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteK8sClusterParam {
    /// ID of the cluster to delete
    pub cluster_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetK8sClusterKubeconfigParam {
    /// ID of the cluster
    pub cluster_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListK8sNodePoolsParam {
    /// ID of the cluster
    pub cluster_id: String,
    /// Page number to retrieve (starting from 1)
    pub page: Option<i64>,
    /// Number of items per page (1-200)
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetK8sNodePoolParam {
    /// ID of the cluster
    pub cluster_id: String,
    /// ID of the node pool
    pub pool_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_fields_default_to_none() {
        let param: ListDropletsParam = serde_json::from_str("{}").unwrap();
        assert!(param.page.is_none());
        assert!(param.per_page.is_none());
    }

    #[test]
    fn test_resize_disk_defaults_to_false() {
        let param: ResizeDropletParam =
            serde_json::from_str(r#"{"droplet_id": 42, "size": "s-2vcpu-2gb"}"#).unwrap();
        assert!(!param.disk);
    }

    #[test]
    fn test_list_images_accepts_type_key() {
        let param: ListImagesParam = serde_json::from_str(r#"{"type": "distribution"}"#).unwrap();
        assert_eq!(param.image_type.as_deref(), Some("distribution"));
    }

    #[test]
    fn test_forwarding_rule_conversion_defaults_certificate() {
        let arg: ForwardingRuleArg = serde_json::from_str(
            r#"{"entry_protocol": "http", "entry_port": 80, "target_protocol": "http", "target_port": 8080}"#,
        )
        .unwrap();
        let rule = ForwardingRule::from(arg);
        assert_eq!(rule.entry_port, 80);
        assert_eq!(rule.target_port, 8080);
        assert_eq!(rule.certificate_id, "");
        assert!(!rule.tls_passthrough);
    }

    #[test]
    fn test_inbound_rule_conversion_keeps_sources() {
        let arg: InboundRuleArg = serde_json::from_str(
            r#"{"protocol": "tcp", "ports": "22", "sources": {"addresses": ["10.0.0.0/8"], "tags": ["bastion"]}}"#,
        )
        .unwrap();
        let rule = InboundRule::from(arg);
        assert_eq!(rule.protocol, "tcp");
        assert_eq!(rule.ports, "22");
        let sources = rule.sources.unwrap();
        assert_eq!(sources.addresses, vec!["10.0.0.0/8"]);
        assert_eq!(sources.tags, vec!["bastion"]);
    }

    #[test]
    fn test_rules_param_tolerates_missing_direction() {
        let param: AddRulesToFirewallParam = serde_json::from_str(
            r#"{"firewall_id": "fw-1", "inbound_rules": [{"protocol": "tcp", "ports": "443"}]}"#,
        )
        .unwrap();
        assert_eq!(param.inbound_rules.len(), 1);
        assert!(param.outbound_rules.is_empty());
        assert!(param.inbound_rules[0].sources.is_none());
    }
}
