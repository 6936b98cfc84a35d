//! Load balancer tool handlers

use crate::params::{
    AddDropletsToLoadBalancerParam, AddForwardingRulesToLoadBalancerParam, CreateLoadBalancerParam,
    DeleteLoadBalancerParam, ForwardingRuleArg, GetLoadBalancerParam, ListLoadBalancersParam,
    RemoveDropletsFromLoadBalancerParam, RemoveForwardingRulesFromLoadBalancerParam,
    UpdateLoadBalancerParam,
};
use crate::response;
use oceanflow_api::{DoClient, ForwardingRule, ListOptions, LoadBalancerRequest};

fn to_rules(args: Vec<ForwardingRuleArg>) -> Vec<ForwardingRule> {
    args.into_iter().map(Into::into).collect()
}

pub(crate) async fn list_load_balancers(
    client: &DoClient,
    param: ListLoadBalancersParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let load_balancers = client
        .list_load_balancers(opts)
        .await
        .map_err(|e| response::failure("list_load_balancers", e))?;
    response::success("list_load_balancers", &load_balancers)
}

pub(crate) async fn get_load_balancer(
    client: &DoClient,
    param: GetLoadBalancerParam,
) -> Result<String, String> {
    let load_balancer = client
        .get_load_balancer(&param.load_balancer_id)
        .await
        .map_err(|e| response::failure("get_load_balancer", e))?;
    response::success("get_load_balancer", &load_balancer)
}

pub(crate) async fn create_load_balancer(
    client: &DoClient,
    param: CreateLoadBalancerParam,
) -> Result<String, String> {
    let request = LoadBalancerRequest {
        name: param.name,
        algorithm: param.algorithm,
        region: param.region,
        forwarding_rules: to_rules(param.forwarding_rules),
        droplet_ids: param.droplet_ids.unwrap_or_default(),
        redirect_http_to_https: false,
        enable_proxy_protocol: false,
    };
    let load_balancer = client
        .create_load_balancer(&request)
        .await
        .map_err(|e| response::failure("create_load_balancer", e))?;
    response::success("create_load_balancer", &load_balancer)
}

pub(crate) async fn update_load_balancer(
    client: &DoClient,
    param: UpdateLoadBalancerParam,
) -> Result<String, String> {
    let request = LoadBalancerRequest {
        name: param.name,
        algorithm: param.algorithm,
        region: param.region,
        forwarding_rules: to_rules(param.forwarding_rules),
        droplet_ids: param.droplet_ids.unwrap_or_default(),
        redirect_http_to_https: false,
        enable_proxy_protocol: false,
    };
    let load_balancer = client
        .update_load_balancer(&param.load_balancer_id, &request)
        .await
        .map_err(|e| response::failure("update_load_balancer", e))?;
    response::success("update_load_balancer", &load_balancer)
}

pub(crate) async fn delete_load_balancer(
    client: &DoClient,
    param: DeleteLoadBalancerParam,
) -> Result<String, String> {
    client
        .delete_load_balancer(&param.load_balancer_id)
        .await
        .map_err(|e| response::failure("delete_load_balancer", e))?;
    response::status_message(
        "delete_load_balancer",
        format!(
            "Load balancer {} deleted successfully",
            param.load_balancer_id
        ),
    )
}

pub(crate) async fn add_droplets_to_load_balancer(
    client: &DoClient,
    param: AddDropletsToLoadBalancerParam,
) -> Result<String, String> {
    client
        .add_droplets_to_load_balancer(&param.load_balancer_id, &param.droplet_ids)
        .await
        .map_err(|e| response::failure("add_droplets_to_load_balancer", e))?;
    response::status_message(
        "add_droplets_to_load_balancer",
        format!(
            "Droplets added to load balancer {} successfully",
            param.load_balancer_id
        ),
    )
}

pub(crate) async fn remove_droplets_from_load_balancer(
    client: &DoClient,
    param: RemoveDropletsFromLoadBalancerParam,
) -> Result<String, String> {
    client
        .remove_droplets_from_load_balancer(&param.load_balancer_id, &param.droplet_ids)
        .await
        .map_err(|e| response::failure("remove_droplets_from_load_balancer", e))?;
    response::status_message(
        "remove_droplets_from_load_balancer",
        format!(
            "Droplets removed from load balancer {} successfully",
            param.load_balancer_id
        ),
    )
}

pub(crate) async fn add_forwarding_rules_to_load_balancer(
    client: &DoClient,
    param: AddForwardingRulesToLoadBalancerParam,
) -> Result<String, String> {
    client
        .add_forwarding_rules_to_load_balancer(
            &param.load_balancer_id,
            &to_rules(param.forwarding_rules),
        )
        .await
        .map_err(|e| response::failure("add_forwarding_rules_to_load_balancer", e))?;
    response::status_message(
        "add_forwarding_rules_to_load_balancer",
        format!(
            "Forwarding rules added to load balancer {} successfully",
            param.load_balancer_id
        ),
    )
}

pub(crate) async fn remove_forwarding_rules_from_load_balancer(
    client: &DoClient,
    param: RemoveForwardingRulesFromLoadBalancerParam,
) -> Result<String, String> {
    client
        .remove_forwarding_rules_from_load_balancer(
            &param.load_balancer_id,
            &to_rules(param.forwarding_rules),
        )
        .await
        .map_err(|e| response::failure("remove_forwarding_rules_from_load_balancer", e))?;
    response::status_message(
        "remove_forwarding_rules_from_load_balancer",
        format!(
            "Forwarding rules removed from load balancer {} successfully",
            param.load_balancer_id
        ),
    )
}
