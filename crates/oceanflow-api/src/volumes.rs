//! Block storage volume endpoints

use crate::client::DoClient;
use crate::error::Result;
use crate::snapshots::Snapshot;
use crate::types::{Action, ActionRoot, ListOptions, Region};
use serde::{Deserialize, Serialize};

impl DoClient {
    /// List volumes, optionally narrowed to one region
    pub async fn list_volumes(&self, region: Option<&str>, opts: ListOptions) -> Result<Vec<Volume>> {
        let path = match region {
            Some(region) if !region.is_empty() => {
                format!("/volumes?region={}&{}", region, opts.query())
            }
            _ => format!("/volumes?{}", opts.query()),
        };
        let root: VolumesRoot = self.get(&path).await?;
        Ok(root.volumes)
    }

    pub async fn get_volume(&self, volume_id: &str) -> Result<Volume> {
        let root: VolumeRoot = self.get(&format!("/volumes/{}", volume_id)).await?;
        Ok(root.volume)
    }

    pub async fn create_volume(&self, request: &VolumeCreateRequest) -> Result<Volume> {
        let root: VolumeRoot = self.post("/volumes", request).await?;
        Ok(root.volume)
    }

    pub async fn delete_volume(&self, volume_id: &str) -> Result<()> {
        self.delete(&format!("/volumes/{}", volume_id)).await
    }

    /// Start an attach action binding the volume to a droplet
    pub async fn attach_volume(&self, volume_id: &str, droplet_id: i64) -> Result<Action> {
        let body = VolumeActionRequest {
            kind: "attach",
            droplet_id: Some(droplet_id),
            size_gigabytes: None,
            region: None,
        };
        let root: ActionRoot = self
            .post(&format!("/volumes/{}/actions", volume_id), &body)
            .await?;
        Ok(root.action)
    }

    /// Start a detach action for the droplet the volume is bound to
    pub async fn detach_volume(&self, volume_id: &str, droplet_id: i64) -> Result<Action> {
        let body = VolumeActionRequest {
            kind: "detach",
            droplet_id: Some(droplet_id),
            size_gigabytes: None,
            region: None,
        };
        let root: ActionRoot = self
            .post(&format!("/volumes/{}/actions", volume_id), &body)
            .await?;
        Ok(root.action)
    }

    /// Start a resize action; volumes only grow
    pub async fn resize_volume(
        &self,
        volume_id: &str,
        size_gigabytes: i64,
        region: &str,
    ) -> Result<Action> {
        let body = VolumeActionRequest {
            kind: "resize",
            droplet_id: None,
            size_gigabytes: Some(size_gigabytes),
            region: Some(region.to_string()),
        };
        let root: ActionRoot = self
            .post(&format!("/volumes/{}/actions", volume_id), &body)
            .await?;
        Ok(root.action)
    }

    /// Take a snapshot of a volume
    pub async fn create_volume_snapshot(
        &self,
        volume_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Snapshot> {
        let body = VolumeSnapshotRequest {
            volume_id: volume_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        };
        let root: VolumeSnapshotRoot = self
            .post(&format!("/volumes/{}/snapshots", volume_id), &body)
            .await?;
        Ok(root.snapshot)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size_gigabytes: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub droplet_ids: Vec<i64>,
    #[serde(default)]
    pub filesystem_type: String,
    #[serde(default)]
    pub filesystem_label: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Creation body; `description` is always sent, even when empty
#[derive(Debug, Clone, Serialize)]
pub struct VolumeCreateRequest {
    pub name: String,
    pub region: String,
    pub size_gigabytes: i64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct VolumesRoot {
    volumes: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct VolumeRoot {
    volume: Volume,
}

#[derive(Debug, Serialize)]
struct VolumeActionRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    droplet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_gigabytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

#[derive(Debug, Serialize)]
struct VolumeSnapshotRequest {
    volume_id: String,
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct VolumeSnapshotRoot {
    snapshot: Snapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_keeps_empty_description() {
        let request = VolumeCreateRequest {
            name: "data-01".to_string(),
            region: "fra1".to_string(),
            size_gigabytes: 100,
            description: String::new(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "data-01");
        assert_eq!(json["region"], "fra1");
        assert_eq!(json["size_gigabytes"], 100);
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_volume_from_api_json() {
        let root: VolumeRoot = serde_json::from_str(
            r#"{
                "volume": {
                    "id": "506f78a4-e098-11e5-ad9f-000f53306ae1",
                    "region": {"slug": "nyc1", "name": "New York 1", "available": true},
                    "droplet_ids": [],
                    "name": "example",
                    "description": "Block store for examples",
                    "size_gigabytes": 10,
                    "filesystem_type": "ext4",
                    "filesystem_label": "example",
                    "created_at": "2016-03-02T17:00:49Z"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.volume.name, "example");
        assert_eq!(root.volume.size_gigabytes, 10);
        assert_eq!(root.volume.region.slug, "nyc1");
        assert!(root.volume.droplet_ids.is_empty());
    }

    #[test]
    fn test_attach_action_body_shape() {
        let body = VolumeActionRequest {
            kind: "attach",
            droplet_id: Some(11612190),
            size_gigabytes: None,
            region: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "attach");
        assert_eq!(json["droplet_id"], 11612190);
        assert!(json.get("size_gigabytes").is_none());
    }

    #[test]
    fn test_resize_action_body_keeps_region() {
        let body = VolumeActionRequest {
            kind: "resize",
            droplet_id: None,
            size_gigabytes: Some(200),
            region: Some(String::new()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "resize");
        assert_eq!(json["size_gigabytes"], 200);
        assert_eq!(json["region"], "");
    }
}
