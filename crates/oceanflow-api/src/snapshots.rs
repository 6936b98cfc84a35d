//! Snapshot endpoints
//!
//! One namespace covers droplet and volume snapshots; the API tells them
//! apart through `resource_type`.

use crate::client::DoClient;
use crate::error::Result;
use crate::types::ListOptions;
use serde::{Deserialize, Serialize};

impl DoClient {
    /// List snapshots of every resource type
    pub async fn list_snapshots(&self, opts: ListOptions) -> Result<Vec<Snapshot>> {
        let root: SnapshotsRoot = self.get(&format!("/snapshots?{}", opts.query())).await?;
        Ok(root.snapshots)
    }

    /// List volume snapshots only
    pub async fn list_volume_snapshots(&self, opts: ListOptions) -> Result<Vec<Snapshot>> {
        let root: SnapshotsRoot = self
            .get(&format!("/snapshots?resource_type=volume&{}", opts.query()))
            .await?;
        Ok(root.snapshots)
    }

    /// List droplet snapshots only
    pub async fn list_droplet_snapshots(&self, opts: ListOptions) -> Result<Vec<Snapshot>> {
        let root: SnapshotsRoot = self
            .get(&format!("/snapshots?resource_type=droplet&{}", opts.query()))
            .await?;
        Ok(root.snapshots)
    }

    pub async fn get_snapshot(&self, snapshot_id: &str) -> Result<Snapshot> {
        let root: SnapshotRoot = self.get(&format!("/snapshots/{}", snapshot_id)).await?;
        Ok(root.snapshot)
    }

    pub async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()> {
        self.delete(&format!("/snapshots/{}", snapshot_id)).await
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub min_disk_size: i64,
    #[serde(default)]
    pub size_gigabytes: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SnapshotsRoot {
    snapshots: Vec<Snapshot>,
}

#[derive(Debug, Deserialize)]
struct SnapshotRoot {
    snapshot: Snapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_api_json() {
        let root: SnapshotRoot = serde_json::from_str(
            r#"{
                "snapshot": {
                    "id": "6372321",
                    "name": "web-01-1595954862243",
                    "created_at": "2020-07-28T16:47:44Z",
                    "regions": ["nyc3", "sfo3"],
                    "resource_id": "200776916",
                    "resource_type": "droplet",
                    "min_disk_size": 25,
                    "size_gigabytes": 2.34,
                    "tags": ["web", "env:prod"]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.snapshot.id, "6372321");
        assert_eq!(root.snapshot.resource_type, "droplet");
        assert_eq!(root.snapshot.regions.len(), 2);
    }

    #[test]
    fn test_snapshot_list_tolerates_sparse_entries() {
        let root: SnapshotsRoot = serde_json::from_str(
            r#"{"snapshots": [{"id": "fbe805e8", "name": "big-data-snapshot", "resource_type": "volume"}]}"#,
        )
        .unwrap();
        assert_eq!(root.snapshots.len(), 1);
        assert_eq!(root.snapshots[0].resource_type, "volume");
        assert!(root.snapshots[0].tags.is_empty());
    }
}
