//! Container registry tool handlers
//!
//! The API exposes a single registry per account, so `list_registries`
//! and `get_registry` answer with the same object. There is also no
//! single-repository endpoint; `get_repository` lists and scans by name.

use crate::params::{
    GetRegistryParam, GetRepositoryParam, ListRepositoriesParam, ListRepositoryTagsParam,
};
use crate::response;
use oceanflow_api::{DoClient, ListOptions, Repository};

fn find_repository(repositories: Vec<Repository>, name: &str) -> Option<Repository> {
    repositories.into_iter().find(|repo| repo.name == name)
}

pub(crate) async fn list_registries(client: &DoClient) -> Result<String, String> {
    let registry = client
        .get_registry()
        .await
        .map_err(|e| response::failure("list_registries", e))?;
    response::success("list_registries", &registry)
}

pub(crate) async fn get_registry(
    client: &DoClient,
    _param: GetRegistryParam,
) -> Result<String, String> {
    // The name is accepted for symmetry but the account has one registry.
    let registry = client
        .get_registry()
        .await
        .map_err(|e| response::failure("get_registry", e))?;
    response::success("get_registry", &registry)
}

pub(crate) async fn list_repositories(
    client: &DoClient,
    param: ListRepositoriesParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let repositories = client
        .list_repositories(&param.registry_name, opts)
        .await
        .map_err(|e| response::failure("list_repositories", e))?;
    response::success("list_repositories", &repositories)
}

pub(crate) async fn get_repository(
    client: &DoClient,
    param: GetRepositoryParam,
) -> Result<String, String> {
    let repositories = client
        .list_repositories(&param.registry_name, ListOptions::default())
        .await
        .map_err(|e| response::failure("get_repository", e))?;

    match find_repository(repositories, &param.repository_name) {
        Some(repository) => response::success("get_repository", &repository),
        None => Err(response::failure(
            "get_repository",
            format!("repository {} not found", param.repository_name),
        )),
    }
}

pub(crate) async fn list_repository_tags(
    client: &DoClient,
    param: ListRepositoryTagsParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let tags = client
        .list_repository_tags(&param.registry_name, &param.repository_name, opts)
        .await
        .map_err(|e| response::failure("list_repository_tags", e))?;
    response::success("list_repository_tags", &tags)
}
