//! Container registry endpoints
//!
//! The API exposes a single registry per account, so there is no
//! collection endpoint to page through.

use crate::client::DoClient;
use crate::error::Result;
use crate::types::ListOptions;
use serde::{Deserialize, Serialize};

impl DoClient {
    /// Fetch the account's registry
    pub async fn get_registry(&self) -> Result<Registry> {
        let root: RegistryRoot = self.get("/registry").await?;
        Ok(root.registry)
    }

    pub async fn list_repositories(
        &self,
        registry_name: &str,
        opts: ListOptions,
    ) -> Result<Vec<Repository>> {
        let root: RepositoriesRoot = self
            .get(&format!(
                "/registry/{}/repositories?{}",
                registry_name,
                opts.query()
            ))
            .await?;
        Ok(root.repositories)
    }

    pub async fn list_repository_tags(
        &self,
        registry_name: &str,
        repository_name: &str,
        opts: ListOptions,
    ) -> Result<Vec<RepositoryTag>> {
        let root: TagsRoot = self
            .get(&format!(
                "/registry/{}/repositories/{}/tags?{}",
                registry_name,
                repository_name,
                opts.query()
            ))
            .await?;
        Ok(root.tags)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub storage_usage_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub registry_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_tag: Option<RepositoryTag>,
    #[serde(default)]
    pub tag_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryTag {
    #[serde(default)]
    pub registry_name: String,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub manifest_digest: String,
    #[serde(default)]
    pub compressed_size_bytes: i64,
    #[serde(default)]
    pub size_bytes: i64,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
struct RegistryRoot {
    registry: Registry,
}

#[derive(Debug, Deserialize)]
struct RepositoriesRoot {
    repositories: Vec<Repository>,
}

#[derive(Debug, Deserialize)]
struct TagsRoot {
    tags: Vec<RepositoryTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_api_json() {
        let root: RegistryRoot = serde_json::from_str(
            r#"{
                "registry": {
                    "name": "example",
                    "created_at": "2020-03-21T16:02:37Z",
                    "region": "fra1",
                    "storage_usage_bytes": 29393920
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.registry.name, "example");
        assert_eq!(root.registry.storage_usage_bytes, 29393920);
    }

    #[test]
    fn test_repositories_from_api_json() {
        let root: RepositoriesRoot = serde_json::from_str(
            r#"{
                "repositories": [
                    {
                        "registry_name": "example",
                        "name": "repo-1",
                        "tag_count": 57,
                        "latest_tag": {
                            "registry_name": "example",
                            "repository": "repo-1",
                            "tag": "latest",
                            "manifest_digest": "sha256:cb8a924afdf0229ef7515d9e5b3024e23b3eb03ddbba287f4a19c6ac90b8d221",
                            "compressed_size_bytes": 2803255,
                            "size_bytes": 5861888,
                            "updated_at": "2020-04-09T23:54:25Z"
                        }
                    }
                ],
                "meta": {"total": 5}
            }"#,
        )
        .unwrap();
        assert_eq!(root.repositories.len(), 1);
        assert_eq!(root.repositories[0].tag_count, 57);
        assert_eq!(
            root.repositories[0].latest_tag.as_ref().unwrap().tag,
            "latest"
        );
    }
}
