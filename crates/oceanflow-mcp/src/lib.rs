//! OceanFlow MCP Server
//!
//! MCP server built on the official rmcp SDK. Runs over the stdio
//! transport and exposes DigitalOcean resource operations as tools; every
//! tool resolves to exactly one handler in [`tools`], sharing one
//! read-only [`DoClient`] constructed at startup.

pub mod params;
mod response;
mod tools;

use anyhow::Result;
use oceanflow_api::DoClient;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::{tool::ToolCallContext, tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_router,
};
use std::sync::Arc;
use tracing::error;

use params::*;

/// OceanFlow MCP server
///
/// Holds the shared client handle and the tool router; both are resolved
/// once at construction, before the transport starts serving.
#[derive(Clone)]
pub struct OceanflowServer {
    client: Arc<DoClient>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl OceanflowServer {
    pub fn new(client: Arc<DoClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Connectivity
    // ========================================================================

    #[tool(description = "Test connection to DigitalOcean API")]
    async fn test_connection(&self) -> Result<String, String> {
        tools::test_connection(&self.client).await
    }

    // ========================================================================
    // Droplets
    // ========================================================================

    #[tool(description = "List all droplets in the account")]
    async fn list_droplets(&self, params: Parameters<ListDropletsParam>) -> Result<String, String> {
        tools::droplets::list_droplets(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific droplet")]
    async fn get_droplet(&self, params: Parameters<GetDropletParam>) -> Result<String, String> {
        tools::droplets::get_droplet(&self.client, params.0).await
    }

    #[tool(description = "Create a new droplet")]
    async fn create_droplet(
        &self,
        params: Parameters<CreateDropletParam>,
    ) -> Result<String, String> {
        tools::droplets::create_droplet(&self.client, params.0).await
    }

    #[tool(description = "Delete a droplet")]
    async fn delete_droplet(
        &self,
        params: Parameters<DeleteDropletParam>,
    ) -> Result<String, String> {
        tools::droplets::delete_droplet(&self.client, params.0).await
    }

    #[tool(description = "Resize a droplet to a different size")]
    async fn resize_droplet(
        &self,
        params: Parameters<ResizeDropletParam>,
    ) -> Result<String, String> {
        tools::droplets::resize_droplet(&self.client, params.0).await
    }

    #[tool(description = "Create a snapshot of a droplet")]
    async fn create_droplet_snapshot(
        &self,
        params: Parameters<CreateDropletSnapshotParam>,
    ) -> Result<String, String> {
        tools::droplets::create_droplet_snapshot(&self.client, params.0).await
    }

    // ========================================================================
    // Volumes
    // ========================================================================

    #[tool(description = "List all volumes in the account")]
    async fn list_volumes(&self, params: Parameters<ListVolumesParam>) -> Result<String, String> {
        tools::volumes::list_volumes(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific volume")]
    async fn get_volume(&self, params: Parameters<GetVolumeParam>) -> Result<String, String> {
        tools::volumes::get_volume(&self.client, params.0).await
    }

    #[tool(description = "Create a new volume")]
    async fn create_volume(&self, params: Parameters<CreateVolumeParam>) -> Result<String, String> {
        tools::volumes::create_volume(&self.client, params.0).await
    }

    #[tool(description = "Delete a volume")]
    async fn delete_volume(&self, params: Parameters<DeleteVolumeParam>) -> Result<String, String> {
        tools::volumes::delete_volume(&self.client, params.0).await
    }

    #[tool(description = "Attach a volume to a droplet")]
    async fn attach_volume(&self, params: Parameters<AttachVolumeParam>) -> Result<String, String> {
        tools::volumes::attach_volume(&self.client, params.0).await
    }

    #[tool(description = "Detach a volume from a droplet")]
    async fn detach_volume(&self, params: Parameters<DetachVolumeParam>) -> Result<String, String> {
        tools::volumes::detach_volume(&self.client, params.0).await
    }

    #[tool(description = "Resize a volume")]
    async fn resize_volume(&self, params: Parameters<ResizeVolumeParam>) -> Result<String, String> {
        tools::volumes::resize_volume(&self.client, params.0).await
    }

    #[tool(description = "Create a snapshot of a volume")]
    async fn create_volume_snapshot(
        &self,
        params: Parameters<CreateVolumeSnapshotParam>,
    ) -> Result<String, String> {
        tools::volumes::create_volume_snapshot(&self.client, params.0).await
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    #[tool(description = "List all snapshots")]
    async fn list_snapshots(
        &self,
        params: Parameters<ListSnapshotsParam>,
    ) -> Result<String, String> {
        tools::snapshots::list_snapshots(&self.client, params.0).await
    }

    #[tool(description = "List all volume snapshots")]
    async fn list_volume_snapshots(
        &self,
        params: Parameters<ListVolumeSnapshotsParam>,
    ) -> Result<String, String> {
        tools::snapshots::list_volume_snapshots(&self.client, params.0).await
    }

    #[tool(description = "List all droplet snapshots")]
    async fn list_droplet_snapshots(
        &self,
        params: Parameters<ListDropletSnapshotsParam>,
    ) -> Result<String, String> {
        tools::snapshots::list_droplet_snapshots(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific snapshot")]
    async fn get_snapshot(&self, params: Parameters<GetSnapshotParam>) -> Result<String, String> {
        tools::snapshots::get_snapshot(&self.client, params.0).await
    }

    #[tool(description = "Delete a snapshot")]
    async fn delete_snapshot(
        &self,
        params: Parameters<DeleteSnapshotParam>,
    ) -> Result<String, String> {
        tools::snapshots::delete_snapshot(&self.client, params.0).await
    }

    // ========================================================================
    // Images
    // ========================================================================

    #[tool(description = "List all images")]
    async fn list_images(&self, params: Parameters<ListImagesParam>) -> Result<String, String> {
        tools::images::list_images(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific image")]
    async fn get_image(&self, params: Parameters<GetImageParam>) -> Result<String, String> {
        tools::images::get_image(&self.client, params.0).await
    }

    #[tool(description = "Update an image")]
    async fn update_image(&self, params: Parameters<UpdateImageParam>) -> Result<String, String> {
        tools::images::update_image(&self.client, params.0).await
    }

    #[tool(description = "Delete an image")]
    async fn delete_image(&self, params: Parameters<DeleteImageParam>) -> Result<String, String> {
        tools::images::delete_image(&self.client, params.0).await
    }

    #[tool(description = "Transfer an image to another region")]
    async fn transfer_image(
        &self,
        params: Parameters<TransferImageParam>,
    ) -> Result<String, String> {
        tools::images::transfer_image(&self.client, params.0).await
    }

    #[tool(description = "Convert an image to snapshot")]
    async fn convert_image_to_snapshot(
        &self,
        params: Parameters<ConvertImageToSnapshotParam>,
    ) -> Result<String, String> {
        tools::images::convert_image_to_snapshot(&self.client, params.0).await
    }

    // ========================================================================
    // Floating IPs
    // ========================================================================

    #[tool(description = "List all floating IPs")]
    async fn list_floating_ips(
        &self,
        params: Parameters<ListFloatingIpsParam>,
    ) -> Result<String, String> {
        tools::floating_ips::list_floating_ips(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific floating IP")]
    async fn get_floating_ip(
        &self,
        params: Parameters<GetFloatingIpParam>,
    ) -> Result<String, String> {
        tools::floating_ips::get_floating_ip(&self.client, params.0).await
    }

    #[tool(description = "Create a new floating IP")]
    async fn create_floating_ip(
        &self,
        params: Parameters<CreateFloatingIpParam>,
    ) -> Result<String, String> {
        tools::floating_ips::create_floating_ip(&self.client, params.0).await
    }

    #[tool(description = "Delete a floating IP")]
    async fn delete_floating_ip(
        &self,
        params: Parameters<DeleteFloatingIpParam>,
    ) -> Result<String, String> {
        tools::floating_ips::delete_floating_ip(&self.client, params.0).await
    }

    #[tool(description = "Assign a floating IP to a droplet")]
    async fn assign_floating_ip(
        &self,
        params: Parameters<AssignFloatingIpParam>,
    ) -> Result<String, String> {
        tools::floating_ips::assign_floating_ip(&self.client, params.0).await
    }

    #[tool(description = "Unassign a floating IP from a droplet")]
    async fn unassign_floating_ip(
        &self,
        params: Parameters<UnassignFloatingIpParam>,
    ) -> Result<String, String> {
        tools::floating_ips::unassign_floating_ip(&self.client, params.0).await
    }

    // ========================================================================
    // Load balancers
    // ========================================================================

    #[tool(description = "List all load balancers")]
    async fn list_load_balancers(
        &self,
        params: Parameters<ListLoadBalancersParam>,
    ) -> Result<String, String> {
        tools::load_balancers::list_load_balancers(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific load balancer")]
    async fn get_load_balancer(
        &self,
        params: Parameters<GetLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::get_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Create a new load balancer")]
    async fn create_load_balancer(
        &self,
        params: Parameters<CreateLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::create_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Update a load balancer")]
    async fn update_load_balancer(
        &self,
        params: Parameters<UpdateLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::update_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Delete a load balancer")]
    async fn delete_load_balancer(
        &self,
        params: Parameters<DeleteLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::delete_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Add droplets to a load balancer")]
    async fn add_droplets_to_load_balancer(
        &self,
        params: Parameters<AddDropletsToLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::add_droplets_to_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Remove droplets from a load balancer")]
    async fn remove_droplets_from_load_balancer(
        &self,
        params: Parameters<RemoveDropletsFromLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::remove_droplets_from_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Add forwarding rules to a load balancer")]
    async fn add_forwarding_rules_to_load_balancer(
        &self,
        params: Parameters<AddForwardingRulesToLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::add_forwarding_rules_to_load_balancer(&self.client, params.0).await
    }

    #[tool(description = "Remove forwarding rules from a load balancer")]
    async fn remove_forwarding_rules_from_load_balancer(
        &self,
        params: Parameters<RemoveForwardingRulesFromLoadBalancerParam>,
    ) -> Result<String, String> {
        tools::load_balancers::remove_forwarding_rules_from_load_balancer(&self.client, params.0)
            .await
    }

    // ========================================================================
    // Firewalls
    // ========================================================================

    #[tool(description = "List all firewalls")]
    async fn list_firewalls(
        &self,
        params: Parameters<ListFirewallsParam>,
    ) -> Result<String, String> {
        tools::firewalls::list_firewalls(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific firewall")]
    async fn get_firewall(&self, params: Parameters<GetFirewallParam>) -> Result<String, String> {
        tools::firewalls::get_firewall(&self.client, params.0).await
    }

    #[tool(description = "Create a new firewall")]
    async fn create_firewall(
        &self,
        params: Parameters<CreateFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::create_firewall(&self.client, params.0).await
    }

    #[tool(description = "Update a firewall")]
    async fn update_firewall(
        &self,
        params: Parameters<UpdateFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::update_firewall(&self.client, params.0).await
    }

    #[tool(description = "Delete a firewall")]
    async fn delete_firewall(
        &self,
        params: Parameters<DeleteFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::delete_firewall(&self.client, params.0).await
    }

    #[tool(description = "Add droplets to a firewall")]
    async fn add_droplets_to_firewall(
        &self,
        params: Parameters<AddDropletsToFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::add_droplets_to_firewall(&self.client, params.0).await
    }

    #[tool(description = "Remove droplets from a firewall")]
    async fn remove_droplets_from_firewall(
        &self,
        params: Parameters<RemoveDropletsFromFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::remove_droplets_from_firewall(&self.client, params.0).await
    }

    #[tool(description = "Add tags to a firewall")]
    async fn add_tags_to_firewall(
        &self,
        params: Parameters<AddTagsToFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::add_tags_to_firewall(&self.client, params.0).await
    }

    #[tool(description = "Remove tags from a firewall")]
    async fn remove_tags_from_firewall(
        &self,
        params: Parameters<RemoveTagsFromFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::remove_tags_from_firewall(&self.client, params.0).await
    }

    #[tool(description = "Add rules to a firewall")]
    async fn add_rules_to_firewall(
        &self,
        params: Parameters<AddRulesToFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::add_rules_to_firewall(&self.client, params.0).await
    }

    #[tool(description = "Remove rules from a firewall")]
    async fn remove_rules_from_firewall(
        &self,
        params: Parameters<RemoveRulesFromFirewallParam>,
    ) -> Result<String, String> {
        tools::firewalls::remove_rules_from_firewall(&self.client, params.0).await
    }

    // ========================================================================
    // Container registry
    // ========================================================================

    #[tool(description = "List all container registries")]
    async fn list_registries(&self) -> Result<String, String> {
        tools::registry::list_registries(&self.client).await
    }

    #[tool(description = "Get details of a specific registry")]
    async fn get_registry(&self, params: Parameters<GetRegistryParam>) -> Result<String, String> {
        tools::registry::get_registry(&self.client, params.0).await
    }

    #[tool(description = "List all repositories in a container registry")]
    async fn list_repositories(
        &self,
        params: Parameters<ListRepositoriesParam>,
    ) -> Result<String, String> {
        tools::registry::list_repositories(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific repository")]
    async fn get_repository(
        &self,
        params: Parameters<GetRepositoryParam>,
    ) -> Result<String, String> {
        tools::registry::get_repository(&self.client, params.0).await
    }

    #[tool(description = "List tags of a repository")]
    async fn list_repository_tags(
        &self,
        params: Parameters<ListRepositoryTagsParam>,
    ) -> Result<String, String> {
        tools::registry::list_repository_tags(&self.client, params.0).await
    }

    // ========================================================================
    // Kubernetes
    // ========================================================================

    #[tool(description = "List all Kubernetes clusters")]
    async fn list_k8s_clusters(
        &self,
        params: Parameters<ListK8sClustersParam>,
    ) -> Result<String, String> {
        tools::kubernetes::list_k8s_clusters(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific Kubernetes cluster")]
    async fn get_k8s_cluster(
        &self,
        params: Parameters<GetK8sClusterParam>,
    ) -> Result<String, String> {
        tools::kubernetes::get_k8s_cluster(&self.client, params.0).await
    }

    #[tool(description = "Create a new Kubernetes cluster")]
    async fn create_k8s_cluster(
        &self,
        params: Parameters<CreateK8sClusterParam>,
    ) -> Result<String, String> {
        tools::kubernetes::create_k8s_cluster(&self.client, params.0).await
    }

    #[tool(description = "Delete a Kubernetes cluster")]
    async fn delete_k8s_cluster(
        &self,
        params: Parameters<DeleteK8sClusterParam>,
    ) -> Result<String, String> {
        tools::kubernetes::delete_k8s_cluster(&self.client, params.0).await
    }

    #[tool(description = "Get the kubeconfig for a Kubernetes cluster")]
    async fn get_k8s_cluster_kubeconfig(
        &self,
        params: Parameters<GetK8sClusterKubeconfigParam>,
    ) -> Result<String, String> {
        tools::kubernetes::get_k8s_cluster_kubeconfig(&self.client, params.0).await
    }

    #[tool(description = "List node pools of a Kubernetes cluster")]
    async fn list_k8s_node_pools(
        &self,
        params: Parameters<ListK8sNodePoolsParam>,
    ) -> Result<String, String> {
        tools::kubernetes::list_k8s_node_pools(&self.client, params.0).await
    }

    #[tool(description = "Get details of a specific node pool")]
    async fn get_k8s_node_pool(
        &self,
        params: Parameters<GetK8sNodePoolParam>,
    ) -> Result<String, String> {
        tools::kubernetes::get_k8s_node_pool(&self.client, params.0).await
    }
}

impl ServerHandler for OceanflowServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "OceanFlow MCP server. Exposes DigitalOcean droplets, volumes, snapshots, \
             images, floating IPs, load balancers, firewalls, container registries and \
             Kubernetes clusters as tools."
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_context = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_context).await
    }
}

/// Start the MCP server on the stdio transport.
///
/// Fails fast before serving when the access token is missing.
pub async fn run_server() -> Result<()> {
    let client = Arc::new(DoClient::from_env()?);
    let server = OceanflowServer::new(client);
    let transport = (tokio::io::stdin(), tokio::io::stdout());

    let service = server.serve(transport).await.map_err(|e| {
        error!("MCP server initialization failed: {}", e);
        anyhow::anyhow!("MCP server initialization failed: {}", e)
    })?;

    service.waiting().await.map_err(|e| {
        error!("MCP server error: {}", e);
        anyhow::anyhow!("MCP server error: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> OceanflowServer {
        OceanflowServer::new(Arc::new(DoClient::new("dop_v1_test").unwrap()))
    }

    #[test]
    fn test_router_registers_every_tool_once() {
        let tools = server().tool_router.list_all();
        assert_eq!(tools.len(), 64);

        let mut names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
        names.sort_unstable();
        let deduped = names.len();
        names.dedup();
        assert_eq!(names.len(), deduped, "duplicate tool registration");
    }

    #[test]
    fn test_router_covers_every_resource_family() {
        let tools = server().tool_router.list_all();
        let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();

        for expected in [
            "test_connection",
            "list_droplets",
            "resize_droplet",
            "create_volume",
            "list_snapshots",
            "convert_image_to_snapshot",
            "unassign_floating_ip",
            "remove_forwarding_rules_from_load_balancer",
            "delete_firewall",
            "list_repository_tags",
            "get_k8s_node_pool",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing tool {expected}");
        }
    }

    #[test]
    fn test_every_tool_carries_a_description() {
        for tool in server().tool_router.list_all() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "tool {} has no description", tool.name);
        }
    }
}
