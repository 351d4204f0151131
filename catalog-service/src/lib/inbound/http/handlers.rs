use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::Vehicle;

pub mod create_vehicle;
pub mod home;
pub mod list_vehicles;
pub mod login;
pub mod logout;
pub mod signup;

/// Landing page after a successful login or signup.
pub const HOME_PAGE: &str = "/home";
/// Login form; also the destination of every gate rejection and of logout.
pub const LOGIN_PAGE: &str = "/login.html";
/// Login form with a generic failure flag.
pub const LOGIN_FAILED_PAGE: &str = "/login.html?error=invalid";
/// Signup form flagged for malformed input.
pub const SIGNUP_INVALID_PAGE: &str = "/signup.html?error=invalid";
/// Signup form flagged for an already registered email.
pub const SIGNUP_EXISTS_PAGE: &str = "/signup.html?error=exists";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                // Details stay in the log; clients get a fixed message.
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidMobile(_)
            | UserError::InvalidEmail(_)
            | UserError::EmptyPassword => ApiError::UnprocessableEntity(err.to_string()),
            // Lookup misses are answered by the login handler itself.
            UserError::NotFoundByEmail(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::InvalidName(_) | VehicleError::InvalidType(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            VehicleError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Catalog entry as returned by every vehicle endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: String,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Vehicle> for VehicleData {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            name: vehicle.name.as_str().to_string(),
            vehicle_type: vehicle.vehicle_type.as_str().to_string(),
            description: vehicle.description.clone(),
            image_url: vehicle.image_url.clone(),
            owner_id: vehicle.owner_id.to_string(),
            owner_email: vehicle.owner_email.clone(),
            created_at: vehicle.created_at,
        }
    }
}
