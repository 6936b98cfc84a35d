//! Managed Kubernetes tool handlers

use crate::params::{
    CreateK8sClusterParam, DeleteK8sClusterParam, GetK8sClusterKubeconfigParam, GetK8sClusterParam,
    GetK8sNodePoolParam, ListK8sClustersParam, ListK8sNodePoolsParam,
};
use crate::response;
use oceanflow_api::{
    DoClient, KubernetesClusterCreateRequest, KubernetesNodePoolCreateRequest, ListOptions,
};
use serde_json::json;

pub(crate) async fn list_k8s_clusters(
    client: &DoClient,
    param: ListK8sClustersParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let clusters = client
        .list_k8s_clusters(opts)
        .await
        .map_err(|e| response::failure("list_k8s_clusters", e))?;
    response::success("list_k8s_clusters", &clusters)
}

pub(crate) async fn get_k8s_cluster(
    client: &DoClient,
    param: GetK8sClusterParam,
) -> Result<String, String> {
    let cluster = client
        .get_k8s_cluster(&param.cluster_id)
        .await
        .map_err(|e| response::failure("get_k8s_cluster", e))?;
    response::success("get_k8s_cluster", &cluster)
}

pub(crate) async fn create_k8s_cluster(
    client: &DoClient,
    param: CreateK8sClusterParam,
) -> Result<String, String> {
    let request = KubernetesClusterCreateRequest {
        name: param.name.clone(),
        region: param.region,
        version: param.version,
        node_pools: vec![KubernetesNodePoolCreateRequest {
            name: format!("{}-pool", param.name),
            size: param.node_pool_size,
            count: param.node_count,
        }],
    };
    let cluster = client
        .create_k8s_cluster(&request)
        .await
        .map_err(|e| response::failure("create_k8s_cluster", e))?;
    response::success("create_k8s_cluster", &cluster)
}

pub(crate) async fn delete_k8s_cluster(
    client: &DoClient,
    param: DeleteK8sClusterParam,
) -> Result<String, String> {
    client
        .delete_k8s_cluster(&param.cluster_id)
        .await
        .map_err(|e| response::failure("delete_k8s_cluster", e))?;
    response::status_message(
        "delete_k8s_cluster",
        format!("Kubernetes cluster {} deleted successfully", param.cluster_id),
    )
}

pub(crate) async fn get_k8s_cluster_kubeconfig(
    client: &DoClient,
    param: GetK8sClusterKubeconfigParam,
) -> Result<String, String> {
    let kubeconfig = client
        .get_kubeconfig(&param.cluster_id)
        .await
        .map_err(|e| response::failure("get_k8s_cluster_kubeconfig", e))?;
    response::success("get_k8s_cluster_kubeconfig", &json!({ "kubeconfig": kubeconfig }))
}

pub(crate) async fn list_k8s_node_pools(
    client: &DoClient,
    param: ListK8sNodePoolsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let node_pools = client
        .list_node_pools(&param.cluster_id, opts)
        .await
        .map_err(|e| response::failure("list_k8s_node_pools", e))?;
    response::success("list_k8s_node_pools", &node_pools)
}

pub(crate) async fn get_k8s_node_pool(
    client: &DoClient,
    param: GetK8sNodePoolParam,
) -> Result<String, String> {
    let node_pool = client
        .get_node_pool(&param.cluster_id, &param.pool_id)
        .await
        .map_err(|e| response::failure("get_k8s_node_pool", e))?;
    response::success("get_k8s_node_pool", &node_pool)
}
