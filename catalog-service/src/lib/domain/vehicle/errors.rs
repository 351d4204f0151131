use thiserror::Error;

/// Error type for VehicleName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleNameError {
    #[error("Vehicle name is empty")]
    Empty,

    #[error("Vehicle name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for VehicleType validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleTypeError {
    #[error("Vehicle type is empty")]
    Empty,

    #[error("Vehicle type too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Vehicle type contains invalid characters (only a-z, 0-9 and hyphen allowed)")]
    InvalidCharacters,
}

/// Top-level error type for all vehicle-related operations
#[derive(Debug, Clone, Error)]
pub enum VehicleError {
    #[error("Invalid vehicle name: {0}")]
    InvalidName(#[from] VehicleNameError),

    #[error("Invalid vehicle type: {0}")]
    InvalidType(#[from] VehicleTypeError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
