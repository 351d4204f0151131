use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::VehicleData;
use crate::domain::vehicle::errors::VehicleNameError;
use crate::domain::vehicle::errors::VehicleTypeError;
use crate::domain::vehicle::models::CreateVehicleCommand;
use crate::domain::vehicle::models::VehicleName;
use crate::domain::vehicle::models::VehicleOwner;
use crate::domain::vehicle::models::VehicleType;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Add a vehicle owned by the caller.
pub async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateVehicleRequest>,
) -> Result<ApiSuccess<VehicleData>, ApiError> {
    state
        .vehicle_service
        .create_vehicle(body.try_into_command()?, VehicleOwner::from(&user))
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::CREATED, vehicle.into()))
}

/// HTTP request body for creating a vehicle (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateVehicleRequest {
    name: String,
    #[serde(rename = "type")]
    vehicle_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateVehicleRequestError {
    #[error("Invalid vehicle name: {0}")]
    Name(#[from] VehicleNameError),

    #[error("Invalid vehicle type: {0}")]
    Type(#[from] VehicleTypeError),
}

impl CreateVehicleRequest {
    fn try_into_command(self) -> Result<CreateVehicleCommand, ParseCreateVehicleRequestError> {
        let name = VehicleName::new(self.name)?;
        let vehicle_type = VehicleType::new(self.vehicle_type)?;
        Ok(CreateVehicleCommand::new(
            name,
            vehicle_type,
            self.description,
            self.image_url,
        ))
    }
}

impl From<ParseCreateVehicleRequestError> for ApiError {
    fn from(err: ParseCreateVehicleRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
