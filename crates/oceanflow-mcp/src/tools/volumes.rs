//! Block storage volume tool handlers

use crate::params::{
    AttachVolumeParam, CreateVolumeParam, CreateVolumeSnapshotParam, DeleteVolumeParam,
    DetachVolumeParam, GetVolumeParam, ListVolumesParam, ResizeVolumeParam,
};
use crate::response;
use oceanflow_api::{DoClient, ListOptions, VolumeCreateRequest};

pub(crate) async fn list_volumes(
    client: &DoClient,
    param: ListVolumesParam,
) -> Result<String, String> {
    let opts = ListOptions::resolve(param.page, param.per_page);
    let volumes = client
        .list_volumes(param.region.as_deref(), opts)
        .await
        .map_err(|e| response::failure("list_volumes", e))?;
    response::success("list_volumes", &volumes)
}

pub(crate) async fn get_volume(client: &DoClient, param: GetVolumeParam) -> Result<String, String> {
    let volume = client
        .get_volume(&param.volume_id)
        .await
        .map_err(|e| response::failure("get_volume", e))?;
    response::success("get_volume", &volume)
}

pub(crate) async fn create_volume(
    client: &DoClient,
    param: CreateVolumeParam,
) -> Result<String, String> {
    let request = VolumeCreateRequest {
        name: param.name,
        region: param.region,
        size_gigabytes: param.size_gigabytes,
        description: param.description.unwrap_or_default(),
    };
    let volume = client
        .create_volume(&request)
        .await
        .map_err(|e| response::failure("create_volume", e))?;
    response::success("create_volume", &volume)
}

pub(crate) async fn delete_volume(
    client: &DoClient,
    param: DeleteVolumeParam,
) -> Result<String, String> {
    client
        .delete_volume(&param.volume_id)
        .await
        .map_err(|e| response::failure("delete_volume", e))?;
    response::status_message(
        "delete_volume",
        format!("Volume {} deleted successfully", param.volume_id),
    )
}

pub(crate) async fn attach_volume(
    client: &DoClient,
    param: AttachVolumeParam,
) -> Result<String, String> {
    let action = client
        .attach_volume(&param.volume_id, param.droplet_id)
        .await
        .map_err(|e| response::failure("attach_volume", e))?;
    response::success("attach_volume", &action)
}

pub(crate) async fn detach_volume(
    client: &DoClient,
    param: DetachVolumeParam,
) -> Result<String, String> {
    let action = client
        .detach_volume(&param.volume_id, param.droplet_id)
        .await
        .map_err(|e| response::failure("detach_volume", e))?;
    response::success("detach_volume", &action)
}

pub(crate) async fn resize_volume(
    client: &DoClient,
    param: ResizeVolumeParam,
) -> Result<String, String> {
    let action = client
        .resize_volume(&param.volume_id, param.size_gigabytes, &param.region)
        .await
        .map_err(|e| response::failure("resize_volume", e))?;
    response::success("resize_volume", &action)
}

pub(crate) async fn create_volume_snapshot(
    client: &DoClient,
    param: CreateVolumeSnapshotParam,
) -> Result<String, String> {
    let snapshot = client
        .create_volume_snapshot(
            &param.volume_id,
            &param.name,
            param.description.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|e| response::failure("create_volume_snapshot", e))?;
    response::success("create_volume_snapshot", &snapshot)
}
