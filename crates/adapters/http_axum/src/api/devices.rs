//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::Device;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a device.
///
/// Missing fields decode as empty strings and are then rejected by the
/// domain builder where that matters.
#[derive(Debug, Default, Deserialize)]
pub struct DeviceRequest {
    #[serde(rename = "SerialNum", default)]
    pub serial_num: String,
    #[serde(rename = "Model", default)]
    pub model: String,
    #[serde(rename = "IP", default)]
    pub ip: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/v1/devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/v1/devices/:serial_num`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(serial_num): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = state.device_service.get_device(&serial_num).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/v1/devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    payload: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let device = Device::builder()
        .serial_num(req.serial_num)
        .model(req.model)
        .ip(req.ip)
        .build()?;

    state.device_service.create_device(device).await?;
    Ok(CreateResponse::Created)
}

/// `PUT /api/v1/devices/:serial_num`
///
/// The serial number in the path wins over any `SerialNum` in the body.
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    Path(serial_num): Path<String>,
    payload: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let device = Device::builder()
        .serial_num(serial_num)
        .model(req.model)
        .ip(req.ip)
        .build()?;

    state.device_service.update_device(device).await?;
    Ok(UpdateResponse::NoContent)
}

/// `DELETE /api/v1/devices/:serial_num`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(serial_num): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    state.device_service.delete_device(&serial_num).await?;
    Ok(DeleteResponse::NoContent)
}
