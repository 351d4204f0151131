use async_trait::async_trait;

use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::CreateVehicleCommand;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleOwner;
use crate::domain::vehicle::models::VehicleType;

/// Port for vehicle catalog operations.
#[async_trait]
pub trait VehicleServicePort: Send + Sync + 'static {
    /// Add a vehicle to the catalog on behalf of an authenticated user.
    ///
    /// # Arguments
    /// * `command` - Validated vehicle fields
    /// * `owner` - Identity of the requesting user
    ///
    /// # Returns
    /// Created vehicle entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_vehicle(
        &self,
        command: CreateVehicleCommand,
        owner: VehicleOwner,
    ) -> Result<Vehicle, VehicleError>;

    /// List catalog entries, optionally restricted to one type.
    ///
    /// # Arguments
    /// * `vehicle_type` - Type to filter on, or None for the whole catalog
    ///
    /// # Returns
    /// Vehicles, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_vehicles(
        &self,
        vehicle_type: Option<VehicleType>,
    ) -> Result<Vec<Vehicle>, VehicleError>;
}

/// Persistence operations for vehicles.
#[async_trait]
pub trait VehicleRepository: Send + Sync + 'static {
    /// Persist a new vehicle.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError>;

    /// Retrieve vehicles of a type, or all vehicles when `vehicle_type` is None.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_type(
        &self,
        vehicle_type: Option<VehicleType>,
    ) -> Result<Vec<Vehicle>, VehicleError>;
}
