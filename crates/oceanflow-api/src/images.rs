//! Image endpoints
//!
//! Images are addressable by numeric ID or by slug; lookup helpers exist
//! for both and the caller decides which to try.

use crate::client::DoClient;
use crate::error::Result;
use crate::types::{Action, ActionRoot, ListOptions};
use serde::{Deserialize, Serialize};

impl DoClient {
    /// List images, optionally narrowed to one catalog.
    ///
    /// `filter` understands `distribution`, `application` and `user`; any
    /// other value lists everything.
    pub async fn list_images(&self, filter: Option<&str>, opts: ListOptions) -> Result<Vec<Image>> {
        let path = match filter {
            Some("distribution") => format!("/images?type=distribution&{}", opts.query()),
            Some("application") => format!("/images?type=application&{}", opts.query()),
            Some("user") => format!("/images?private=true&{}", opts.query()),
            _ => format!("/images?{}", opts.query()),
        };
        let root: ImagesRoot = self.get(&path).await?;
        Ok(root.images)
    }

    pub async fn get_image_by_id(&self, image_id: i64) -> Result<Image> {
        let root: ImageRoot = self.get(&format!("/images/{}", image_id)).await?;
        Ok(root.image)
    }

    pub async fn get_image_by_slug(&self, slug: &str) -> Result<Image> {
        let root: ImageRoot = self.get(&format!("/images/{}", slug)).await?;
        Ok(root.image)
    }

    /// Rename a user image
    pub async fn update_image(&self, image_id: i64, name: &str) -> Result<Image> {
        let body = ImageUpdateRequest {
            name: name.to_string(),
        };
        let root: ImageRoot = self.put(&format!("/images/{}", image_id), &body).await?;
        Ok(root.image)
    }

    pub async fn delete_image(&self, image_id: i64) -> Result<()> {
        self.delete(&format!("/images/{}", image_id)).await
    }

    /// Start a transfer action moving the image to another region
    pub async fn transfer_image(&self, image_id: i64, region: &str) -> Result<Action> {
        let body = ImageActionRequest {
            kind: "transfer",
            region: Some(region.to_string()),
        };
        let root: ActionRoot = self
            .post(&format!("/images/{}/actions", image_id), &body)
            .await?;
        Ok(root.action)
    }

    /// Convert a backup image into a snapshot
    pub async fn convert_image_to_snapshot(&self, image_id: i64) -> Result<Action> {
        let body = ImageActionRequest {
            kind: "convert",
            region: None,
        };
        let root: ActionRoot = self
            .post(&format!("/images/{}/actions", image_id), &body)
            .await?;
        Ok(root.action)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub distribution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub min_disk_size: i64,
    #[serde(default)]
    pub size_gigabytes: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct ImagesRoot {
    images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
struct ImageRoot {
    image: Image,
}

#[derive(Debug, Serialize)]
struct ImageUpdateRequest {
    name: String,
}

#[derive(Debug, Serialize)]
struct ImageActionRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_from_api_json() {
        let root: ImageRoot = serde_json::from_str(
            r#"{
                "image": {
                    "id": 7555620,
                    "name": "Nifty New Snapshot",
                    "type": "snapshot",
                    "distribution": "Ubuntu",
                    "slug": null,
                    "public": false,
                    "regions": ["nyc2", "nyc3"],
                    "min_disk_size": 20,
                    "size_gigabytes": 2.34,
                    "created_at": "2014-11-04T22:23:02Z",
                    "status": "available"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.image.id, 7555620);
        assert_eq!(root.image.kind, "snapshot");
        assert!(root.image.slug.is_none());
        assert!(!root.image.public);
    }

    #[test]
    fn test_transfer_action_body_shape() {
        let body = ImageActionRequest {
            kind: "transfer",
            region: Some("sfo3".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "transfer");
        assert_eq!(json["region"], "sfo3");
    }

    #[test]
    fn test_convert_action_body_shape() {
        let body = ImageActionRequest {
            kind: "convert",
            region: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "convert");
        assert!(json.get("region").is_none());
    }
}
