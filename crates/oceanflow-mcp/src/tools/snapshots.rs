//! Snapshot tool handlers
//!
//! `list_snapshots` filters by resource type on the client side after
//! retrieving the page; the dedicated volume/droplet listings use the
//! API's own filter.

use crate::params::{
    DeleteSnapshotParam, GetSnapshotParam, ListDropletSnapshotsParam, ListSnapshotsParam,
    ListVolumeSnapshotsParam,
};
use crate::response;
use oceanflow_api::{DoClient, ListOptions, Snapshot};

fn filter_by_resource_type(snapshots: Vec<Snapshot>, resource_type: Option<&str>) -> Vec<Snapshot> {
    match resource_type {
        Some(kind) if !kind.is_empty() => snapshots
            .into_iter()
            .filter(|s| s.resource_type == kind)
            .collect(),
        _ => snapshots,
    }
}

pub(crate) async fn list_snapshots(
    client: &DoClient,
    param: ListSnapshotsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let snapshots = client
        .list_snapshots(opts)
        .await
        .map_err(|e| response::failure("list_snapshots", e))?;
    let snapshots = filter_by_resource_type(snapshots, param.resource_type.as_deref());
    response::success("list_snapshots", &snapshots)
}

pub(crate) async fn list_volume_snapshots(
    client: &DoClient,
    param: ListVolumeSnapshotsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let snapshots = client
        .list_volume_snapshots(opts)
        .await
        .map_err(|e| response::failure("list_volume_snapshots", e))?;
    response::success("list_volume_snapshots", &snapshots)
}

pub(crate) async fn list_droplet_snapshots(
    client: &DoClient,
    param: ListDropletSnapshotsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let snapshots = client
        .list_droplet_snapshots(opts)
        .await
        .map_err(|e| response::failure("list_droplet_snapshots", e))?;
    response::success("list_droplet_snapshots", &snapshots)
}

pub(crate) async fn get_snapshot(
    client: &DoClient,
    param: GetSnapshotParam,
) -> Result<String, String> {
    let snapshot = client
        .get_snapshot(&param.snapshot_id)
        .await
        .map_err(|e| response::failure("get_snapshot", e))?;
    response::success("get_snapshot", &snapshot)
}

pub(crate) async fn delete_snapshot(
    client: &DoClient,
    param: DeleteSnapshotParam,
) -> Result<String, String> {
    client
        .delete_snapshot(&param.snapshot_id)
        .await
        .map_err(|e| response::failure("delete_snapshot", e))?;
    response::status_message(
        "delete_snapshot",
        format!("Snapshot {} deleted successfully", param.snapshot_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: &str, resource_type: &str) -> Snapshot {
        Snapshot {
            id: id.to_string(),
            name: format!("snap-{}", id),
            created_at: String::new(),
            regions: vec![],
            resource_id: String::new(),
            resource_type: resource_type.to_string(),
            min_disk_size: 0,
            size_gigabytes: 0.0,
            tags: vec![],
        }
    }

    #[test]
    fn test_filter_keeps_matching_resource_type() {
        let snapshots = vec![
            snapshot("1", "droplet"),
            snapshot("2", "volume"),
            snapshot("3", "droplet"),
        ];
        let filtered = filter_by_resource_type(snapshots, Some("droplet"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.resource_type == "droplet"));
    }

    #[test]
    fn test_filter_passes_through_without_type() {
        let snapshots = vec![snapshot("1", "droplet"), snapshot("2", "volume")];
        assert_eq!(filter_by_resource_type(snapshots.clone(), None).len(), 2);
        assert_eq!(filter_by_resource_type(snapshots, Some("")).len(), 2);
    }

    #[test]
    fn test_filter_with_unknown_type_yields_empty() {
        let snapshots = vec![snapshot("1", "droplet")];
        assert!(filter_by_resource_type(snapshots, Some("database")).is_empty());
    }
}
