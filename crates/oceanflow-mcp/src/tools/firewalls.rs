//! Cloud firewall tool handlers
//!
//! The list response is reduced to id/name/status per entry, mirroring
//! the droplet listing; a firewall's full rule set only comes back from
//! the single-firewall lookup.

use crate::params::{
    AddDropletsToFirewallParam, AddRulesToFirewallParam, AddTagsToFirewallParam,
    CreateFirewallParam, DeleteFirewallParam, GetFirewallParam, InboundRuleArg,
    ListFirewallsParam, OutboundRuleArg, RemoveDropletsFromFirewallParam,
    RemoveRulesFromFirewallParam, RemoveTagsFromFirewallParam, UpdateFirewallParam,
};
use crate::response;
use oceanflow_api::{DoClient, FirewallRequest, FirewallRulesRequest, ListOptions};
use serde_json::json;

fn rules_request(
    inbound: Vec<InboundRuleArg>,
    outbound: Vec<OutboundRuleArg>,
) -> FirewallRulesRequest {
    FirewallRulesRequest {
        inbound_rules: inbound.into_iter().map(Into::into).collect(),
        outbound_rules: outbound.into_iter().map(Into::into).collect(),
    }
}

pub(crate) async fn list_firewalls(
    client: &DoClient,
    param: ListFirewallsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let firewalls = client
        .list_firewalls(opts)
        .await
        .map_err(|e| response::failure("list_firewalls", e))?;

    let firewalls: Vec<_> = firewalls
        .iter()
        .map(|f| json!({"id": f.id, "name": f.name, "status": f.status}))
        .collect();

    response::success("list_firewalls", &json!({ "firewalls": firewalls }))
}

pub(crate) async fn get_firewall(
    client: &DoClient,
    param: GetFirewallParam,
) -> Result<String, String> {
    let firewall = client
        .get_firewall(&param.firewall_id)
        .await
        .map_err(|e| response::failure("get_firewall", e))?;
    response::success("get_firewall", &firewall)
}

pub(crate) async fn create_firewall(
    client: &DoClient,
    param: CreateFirewallParam,
) -> Result<String, String> {
    let request = FirewallRequest {
        name: param.name,
        inbound_rules: param.inbound_rules.into_iter().map(Into::into).collect(),
        outbound_rules: param.outbound_rules.into_iter().map(Into::into).collect(),
        droplet_ids: param.droplet_ids,
        tags: param.tags,
    };
    let firewall = client
        .create_firewall(&request)
        .await
        .map_err(|e| response::failure("create_firewall", e))?;
    response::success("create_firewall", &firewall)
}

pub(crate) async fn update_firewall(
    client: &DoClient,
    param: UpdateFirewallParam,
) -> Result<String, String> {
    let request = FirewallRequest {
        name: param.name,
        inbound_rules: param.inbound_rules.into_iter().map(Into::into).collect(),
        outbound_rules: param.outbound_rules.into_iter().map(Into::into).collect(),
        droplet_ids: None,
        tags: None,
    };
    let firewall = client
        .update_firewall(&param.firewall_id, &request)
        .await
        .map_err(|e| response::failure("update_firewall", e))?;
    response::success("update_firewall", &firewall)
}

pub(crate) async fn delete_firewall(
    client: &DoClient,
    param: DeleteFirewallParam,
) -> Result<String, String> {
    client
        .delete_firewall(&param.firewall_id)
        .await
        .map_err(|e| response::failure("delete_firewall", e))?;
    response::status_message(
        "delete_firewall",
        format!("Firewall {} deleted successfully", param.firewall_id),
    )
}

pub(crate) async fn add_droplets_to_firewall(
    client: &DoClient,
    param: AddDropletsToFirewallParam,
) -> Result<String, String> {
    client
        .add_droplets_to_firewall(&param.firewall_id, &param.droplet_ids)
        .await
        .map_err(|e| response::failure("add_droplets_to_firewall", e))?;
    response::status_message(
        "add_droplets_to_firewall",
        format!("Droplets added to firewall {} successfully", param.firewall_id),
    )
}

pub(crate) async fn remove_droplets_from_firewall(
    client: &DoClient,
    param: RemoveDropletsFromFirewallParam,
) -> Result<String, String> {
    client
        .remove_droplets_from_firewall(&param.firewall_id, &param.droplet_ids)
        .await
        .map_err(|e| response::failure("remove_droplets_from_firewall", e))?;
    response::status_message(
        "remove_droplets_from_firewall",
        format!(
            "Droplets removed from firewall {} successfully",
            param.firewall_id
        ),
    )
}

pub(crate) async fn add_tags_to_firewall(
    client: &DoClient,
    param: AddTagsToFirewallParam,
) -> Result<String, String> {
    client
        .add_tags_to_firewall(&param.firewall_id, &param.tags)
        .await
        .map_err(|e| response::failure("add_tags_to_firewall", e))?;
    response::status_message(
        "add_tags_to_firewall",
        format!("Tags added to firewall {} successfully", param.firewall_id),
    )
}

pub(crate) async fn remove_tags_from_firewall(
    client: &DoClient,
    param: RemoveTagsFromFirewallParam,
) -> Result<String, String> {
    client
        .remove_tags_from_firewall(&param.firewall_id, &param.tags)
        .await
        .map_err(|e| response::failure("remove_tags_from_firewall", e))?;
    response::status_message(
        "remove_tags_from_firewall",
        format!(
            "Tags removed from firewall {} successfully",
            param.firewall_id
        ),
    )
}

pub(crate) async fn add_rules_to_firewall(
    client: &DoClient,
    param: AddRulesToFirewallParam,
) -> Result<String, String> {
    let request = rules_request(param.inbound_rules, param.outbound_rules);
    client
        .add_rules_to_firewall(&param.firewall_id, &request)
        .await
        .map_err(|e| response::failure("add_rules_to_firewall", e))?;
    response::status_message(
        "add_rules_to_firewall",
        format!("Rules added to firewall {} successfully", param.firewall_id),
    )
}

pub(crate) async fn remove_rules_from_firewall(
    client: &DoClient,
    param: RemoveRulesFromFirewallParam,
) -> Result<String, String> {
    let request = rules_request(param.inbound_rules, param.outbound_rules);
    client
        .remove_rules_from_firewall(&param.firewall_id, &request)
        .await
        .map_err(|e| response::failure("remove_rules_from_firewall", e))?;
    response::status_message(
        "remove_rules_from_firewall",
        format!(
            "Rules removed from firewall {} successfully",
            param.firewall_id
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_request_converts_both_directions() {
        let inbound: Vec<InboundRuleArg> = serde_json::from_str(
            r#"[{"protocol": "tcp", "ports": "22", "sources": {"addresses": ["10.0.0.0/8"]}}]"#,
        )
        .unwrap();
        let outbound: Vec<OutboundRuleArg> = serde_json::from_str(
            r#"[{"protocol": "udp", "ports": "53", "destinations": {"addresses": ["0.0.0.0/0"]}}]"#,
        )
        .unwrap();

        let request = rules_request(inbound, outbound);
        assert_eq!(request.inbound_rules[0].protocol, "tcp");
        assert_eq!(
            request.inbound_rules[0].sources.as_ref().unwrap().addresses,
            vec!["10.0.0.0/8"]
        );
        assert_eq!(request.outbound_rules[0].ports, "53");
    }

    #[test]
    fn test_rules_request_tolerates_one_empty_direction() {
        let request = rules_request(vec![], vec![]);
        assert!(request.inbound_rules.is_empty());
        assert!(request.outbound_rules.is_empty());
    }
}
