use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::domain::vehicle::errors::VehicleNameError;
use crate::domain::vehicle::errors::VehicleTypeError;

/// Vehicle unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub Uuid);

impl VehicleId {
    /// Generate a new random vehicle ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Catalog entry.
///
/// The owner fields are copied from the identity of the request that created
/// the vehicle, never from client input.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: VehicleName,
    pub vehicle_type: VehicleType,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: UserId,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

/// Vehicle display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleName(String);

impl VehicleName {
    const MAX_LENGTH: usize = 100;

    /// Create a validated vehicle name.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, VehicleNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(VehicleNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(VehicleNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Catalog category such as `car` or `bike`.
///
/// Normalized to lower case; 1-32 characters of `a-z`, `0-9` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleType(String);

impl VehicleType {
    const MAX_LENGTH: usize = 32;

    /// Create a validated vehicle type.
    ///
    /// # Errors
    /// * `Empty` - Type is blank
    /// * `TooLong` - Type longer than 32 characters
    /// * `InvalidCharacters` - Anything outside `a-z`, `0-9` and `-`
    pub fn new(vehicle_type: String) -> Result<Self, VehicleTypeError> {
        let vehicle_type = vehicle_type.trim().to_lowercase();
        let length = vehicle_type.len();

        if length == 0 {
            return Err(VehicleTypeError::Empty);
        }

        if length > Self::MAX_LENGTH {
            return Err(VehicleTypeError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if !vehicle_type
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(VehicleTypeError::InvalidCharacters);
        }

        Ok(Self(vehicle_type))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of the user creating a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleOwner {
    pub id: UserId,
    pub email: String,
}

/// Command to add a vehicle to the catalog
#[derive(Debug)]
pub struct CreateVehicleCommand {
    pub name: VehicleName,
    pub vehicle_type: VehicleType,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl CreateVehicleCommand {
    /// Construct a new create vehicle command.
    ///
    /// Blank optional fields are dropped.
    pub fn new(
        name: VehicleName,
        vehicle_type: VehicleType,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            name,
            vehicle_type,
            description: non_blank(description),
            image_url: non_blank(image_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_is_normalized() {
        let vehicle_type = VehicleType::new(" Car ".to_string()).unwrap();
        assert_eq!(vehicle_type.as_str(), "car");

        assert_eq!(
            VehicleType::new("e-bike2".to_string()).unwrap().as_str(),
            "e-bike2"
        );
    }

    #[test]
    fn test_vehicle_type_rejects_invalid_input() {
        assert_eq!(
            VehicleType::new("".to_string()),
            Err(VehicleTypeError::Empty)
        );
        assert_eq!(
            VehicleType::new("sports car".to_string()),
            Err(VehicleTypeError::InvalidCharacters)
        );
        assert!(matches!(
            VehicleType::new("a".repeat(33)),
            Err(VehicleTypeError::TooLong { .. })
        ));
    }

    #[test]
    fn test_vehicle_name_bounds() {
        assert_eq!(
            VehicleName::new("  Model T ".to_string()).unwrap().as_str(),
            "Model T"
        );
        assert_eq!(
            VehicleName::new(" ".to_string()),
            Err(VehicleNameError::Empty)
        );
        assert!(matches!(
            VehicleName::new("x".repeat(101)),
            Err(VehicleNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_command_drops_blank_optionals() {
        let command = CreateVehicleCommand::new(
            VehicleName::new("Model T".to_string()).unwrap(),
            VehicleType::new("car".to_string()).unwrap(),
            Some("   ".to_string()),
            Some(" /images/model-t.png ".to_string()),
        );

        assert_eq!(command.description, None);
        assert_eq!(command.image_url.as_deref(), Some("/images/model-t.png"));
    }
}
