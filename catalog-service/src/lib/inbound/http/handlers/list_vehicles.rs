use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::VehicleData;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::VehicleType;
use crate::inbound::http::router::AppState;

pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<ListVehiclesParams>,
) -> Result<ApiSuccess<Vec<VehicleData>>, ApiError> {
    let vehicle_type = params
        .vehicle_type
        .filter(|t| !t.trim().is_empty())
        .map(VehicleType::new)
        .transpose()
        .map_err(VehicleError::from)?;

    let vehicles = state.vehicle_service.list_vehicles(vehicle_type).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        vehicles.iter().map(VehicleData::from).collect(),
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListVehiclesParams {
    #[serde(rename = "type")]
    vehicle_type: Option<String>,
}
