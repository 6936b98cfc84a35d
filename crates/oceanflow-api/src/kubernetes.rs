//! Managed Kubernetes (DOKS) endpoints

use crate::client::DoClient;
use crate::error::Result;
use crate::types::ListOptions;
use serde::{Deserialize, Serialize};

impl DoClient {
    pub async fn list_k8s_clusters(&self, opts: ListOptions) -> Result<Vec<KubernetesCluster>> {
        let root: ClustersRoot = self
            .get(&format!("/kubernetes/clusters?{}", opts.query()))
            .await?;
        Ok(root.kubernetes_clusters)
    }

    pub async fn get_k8s_cluster(&self, cluster_id: &str) -> Result<KubernetesCluster> {
        let root: ClusterRoot = self
            .get(&format!("/kubernetes/clusters/{}", cluster_id))
            .await?;
        Ok(root.kubernetes_cluster)
    }

    pub async fn create_k8s_cluster(
        &self,
        request: &KubernetesClusterCreateRequest,
    ) -> Result<KubernetesCluster> {
        let root: ClusterRoot = self.post("/kubernetes/clusters", request).await?;
        Ok(root.kubernetes_cluster)
    }

    pub async fn delete_k8s_cluster(&self, cluster_id: &str) -> Result<()> {
        self.delete(&format!("/kubernetes/clusters/{}", cluster_id))
            .await
    }

    /// Fetch the cluster credentials; the endpoint answers raw YAML
    pub async fn get_kubeconfig(&self, cluster_id: &str) -> Result<String> {
        self.get_text(&format!("/kubernetes/clusters/{}/kubeconfig", cluster_id))
            .await
    }

    pub async fn list_node_pools(
        &self,
        cluster_id: &str,
        opts: ListOptions,
    ) -> Result<Vec<KubernetesNodePool>> {
        let root: NodePoolsRoot = self
            .get(&format!(
                "/kubernetes/clusters/{}/node_pools?{}",
                cluster_id,
                opts.query()
            ))
            .await?;
        Ok(root.node_pools)
    }

    pub async fn get_node_pool(
        &self,
        cluster_id: &str,
        pool_id: &str,
    ) -> Result<KubernetesNodePool> {
        let root: NodePoolRoot = self
            .get(&format!(
                "/kubernetes/clusters/{}/node_pools/{}",
                cluster_id, pool_id
            ))
            .await?;
        Ok(root.node_pool)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesCluster {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub cluster_subnet: String,
    #[serde(default)]
    pub service_subnet: String,
    #[serde(default)]
    pub ipv4: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub node_pools: Vec<KubernetesNodePool>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub status: ClusterStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterStatus {
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesNodePool {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub auto_scale: bool,
    #[serde(default)]
    pub min_nodes: i64,
    #[serde(default)]
    pub max_nodes: i64,
    #[serde(default)]
    pub nodes: Vec<KubernetesNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeStatus {
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KubernetesClusterCreateRequest {
    pub name: String,
    pub region: String,
    pub version: String,
    pub node_pools: Vec<KubernetesNodePoolCreateRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KubernetesNodePoolCreateRequest {
    pub name: String,
    pub size: String,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
struct ClustersRoot {
    kubernetes_clusters: Vec<KubernetesCluster>,
}

#[derive(Debug, Deserialize)]
struct ClusterRoot {
    kubernetes_cluster: KubernetesCluster,
}

#[derive(Debug, Deserialize)]
struct NodePoolsRoot {
    node_pools: Vec<KubernetesNodePool>,
}

#[derive(Debug, Deserialize)]
struct NodePoolRoot {
    node_pool: KubernetesNodePool,
}
