use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::VehicleData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn home(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<HomeResponseData>, ApiError> {
    let vehicles = state.vehicle_service.list_vehicles(None).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        HomeResponseData {
            user: (&user).into(),
            vehicles: vehicles.iter().map(VehicleData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponseData {
    pub user: SessionUserData,
    pub vehicles: Vec<VehicleData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUserData {
    pub id: String,
    pub email: String,
}

impl From<&AuthenticatedUser> for SessionUserData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.clone(),
        }
    }
}
