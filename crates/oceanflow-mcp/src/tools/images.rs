//! Image tool handlers
//!
//! Images are addressable by numeric ID or by slug. Lookup tries the ID
//! form first when the identifier parses as an integer and falls back to
//! the slug form; the mutating paths require a numeric ID and reject
//! anything else before touching the API.

use crate::params::{
    ConvertImageToSnapshotParam, DeleteImageParam, GetImageParam, ListImagesParam,
    TransferImageParam, UpdateImageParam,
};
use crate::response;
use oceanflow_api::{DoClient, ListOptions};

/// How a caller-supplied image identifier gets resolved
#[derive(Debug, PartialEq, Eq)]
enum ImageLookup {
    /// Numeric identifier: ID endpoint first, slug endpoint as fallback
    IdThenSlug(i64),
    /// Anything non-numeric goes straight to the slug endpoint
    Slug,
}

fn lookup_strategy(image_id: &str) -> ImageLookup {
    match image_id.parse() {
        Ok(id) => ImageLookup::IdThenSlug(id),
        Err(_) => ImageLookup::Slug,
    }
}

/// Numeric-ID validation for the update/delete/action paths
fn parse_image_id(image_id: &str, operation: &str) -> Result<i64, String> {
    image_id
        .parse()
        .map_err(|_| response::failure(operation, format!("invalid image ID: {}", image_id)))
}

pub(crate) async fn list_images(
    client: &DoClient,
    param: ListImagesParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let images = client
        .list_images(param.image_type.as_deref(), opts)
        .await
        .map_err(|e| response::failure("list_images", e))?;
    response::success("list_images", &images)
}

pub(crate) async fn get_image(client: &DoClient, param: GetImageParam) -> Result<String, String> {
    if let ImageLookup::IdThenSlug(id) = lookup_strategy(&param.image_id) {
        if let Ok(image) = client.get_image_by_id(id).await {
            return response::success("get_image", &image);
        }
    }

    let image = client
        .get_image_by_slug(&param.image_id)
        .await
        .map_err(|e| response::failure("get_image", e))?;
    response::success("get_image", &image)
}

pub(crate) async fn update_image(
    client: &DoClient,
    param: UpdateImageParam,
) -> Result<String, String> {
    let id = parse_image_id(&param.image_id, "update_image")?;
    let image = client
        .update_image(id, &param.name)
        .await
        .map_err(|e| response::failure("update_image", e))?;
    response::success("update_image", &image)
}

pub(crate) async fn delete_image(
    client: &DoClient,
    param: DeleteImageParam,
) -> Result<String, String> {
    let id = parse_image_id(&param.image_id, "delete_image")?;
    client
        .delete_image(id)
        .await
        .map_err(|e| response::failure("delete_image", e))?;
    response::status_message(
        "delete_image",
        format!("Image {} deleted successfully", param.image_id),
    )
}

pub(crate) async fn transfer_image(
    client: &DoClient,
    param: TransferImageParam,
) -> Result<String, String> {
    let id = parse_image_id(&param.image_id, "transfer_image")?;
    let action = client
        .transfer_image(id, &param.region_slug)
        .await
        .map_err(|e| response::failure("transfer_image", e))?;
    response::success("transfer_image", &action)
}

pub(crate) async fn convert_image_to_snapshot(
    client: &DoClient,
    param: ConvertImageToSnapshotParam,
) -> Result<String, String> {
    let id = parse_image_id(&param.image_id, "convert_image_to_snapshot")?;
    let action = client
        .convert_image_to_snapshot(id)
        .await
        .map_err(|e| response::failure("convert_image_to_snapshot", e))?;
    response::success("convert_image_to_snapshot", &action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_strategy_tries_id_first_for_numeric() {
        assert_eq!(lookup_strategy("7555620"), ImageLookup::IdThenSlug(7555620));
    }

    #[test]
    fn test_lookup_strategy_goes_straight_to_slug_otherwise() {
        assert_eq!(lookup_strategy("ubuntu-22-04-x64"), ImageLookup::Slug);
        assert_eq!(lookup_strategy("22-04"), ImageLookup::Slug);
        assert_eq!(lookup_strategy(""), ImageLookup::Slug);
    }

    #[test]
    fn test_parse_image_id_accepts_numeric() {
        assert_eq!(parse_image_id("7555620", "update_image").unwrap(), 7555620);
    }

    #[test]
    fn test_parse_image_id_rejects_slug() {
        let err = parse_image_id("ubuntu-22-04-x64", "delete_image").unwrap_err();
        assert_eq!(err, "delete_image: invalid image ID: ubuntu-22-04-x64");
    }

    #[tokio::test]
    async fn test_mutating_paths_fail_before_any_api_call() {
        // Validation happens first, so a non-numeric ID errors even with an
        // unusable client.
        let client = DoClient::new("dop_v1_test").unwrap();
        let err = update_image(
            &client,
            UpdateImageParam {
                image_id: "not-a-number".to_string(),
                name: "renamed".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err, "update_image: invalid image ID: not-a-number");

        let err = convert_image_to_snapshot(
            &client,
            ConvertImageToSnapshotParam {
                image_id: "fedora-42".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err, "convert_image_to_snapshot: invalid image ID: fedora-42");
    }
}
