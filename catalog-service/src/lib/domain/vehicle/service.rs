use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::CreateVehicleCommand;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::VehicleOwner;
use crate::domain::vehicle::models::VehicleType;
use crate::domain::vehicle::ports::VehicleRepository;
use crate::domain::vehicle::ports::VehicleServicePort;

/// Domain service for the vehicle catalog.
pub struct VehicleService<VR>
where
    VR: VehicleRepository,
{
    repository: Arc<VR>,
}

impl<VR> VehicleService<VR>
where
    VR: VehicleRepository,
{
    pub fn new(repository: Arc<VR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<VR> VehicleServicePort for VehicleService<VR>
where
    VR: VehicleRepository,
{
    async fn create_vehicle(
        &self,
        command: CreateVehicleCommand,
        owner: VehicleOwner,
    ) -> Result<Vehicle, VehicleError> {
        let vehicle = Vehicle {
            id: VehicleId::new(),
            name: command.name,
            vehicle_type: command.vehicle_type,
            description: command.description,
            image_url: command.image_url,
            owner_id: owner.id,
            owner_email: owner.email,
            created_at: Utc::now(),
        };

        let created = self.repository.insert(vehicle).await?;

        tracing::info!(
            vehicle_id = %created.id,
            vehicle_type = %created.vehicle_type,
            owner_id = %created.owner_id,
            "Vehicle created"
        );

        Ok(created)
    }

    async fn list_vehicles(
        &self,
        vehicle_type: Option<VehicleType>,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        self.repository.find_by_type(vehicle_type).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::UserId;
    use crate::domain::vehicle::models::VehicleName;

    mock! {
        pub TestVehicleRepository {}

        #[async_trait]
        impl VehicleRepository for TestVehicleRepository {
            async fn insert(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError>;
            async fn find_by_type(&self, vehicle_type: Option<VehicleType>) -> Result<Vec<Vehicle>, VehicleError>;
        }
    }

    fn vehicle(name: &str, vehicle_type: &str) -> Vehicle {
        Vehicle {
            id: VehicleId::new(),
            name: VehicleName::new(name.to_string()).unwrap(),
            vehicle_type: VehicleType::new(vehicle_type.to_string()).unwrap(),
            description: None,
            image_url: None,
            owner_id: UserId::new(),
            owner_email: "owner@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_vehicle_tags_owner() {
        let mut repository = MockTestVehicleRepository::new();
        let owner_id = UserId::new();

        repository
            .expect_insert()
            .withf(move |vehicle| {
                vehicle.owner_id == owner_id
                    && vehicle.owner_email == "b@x.com"
                    && vehicle.vehicle_type.as_str() == "car"
            })
            .times(1)
            .returning(|vehicle| Ok(vehicle));

        let service = VehicleService::new(Arc::new(repository));

        let command = CreateVehicleCommand::new(
            VehicleName::new("Model T".to_string()).unwrap(),
            VehicleType::new("car".to_string()).unwrap(),
            Some("First mass-produced car".to_string()),
            None,
        );
        let owner = VehicleOwner {
            id: owner_id,
            email: "b@x.com".to_string(),
        };

        let created = service
            .create_vehicle(command, owner)
            .await
            .expect("Failed to create vehicle");

        assert_eq!(created.name.as_str(), "Model T");
        assert_eq!(created.owner_id, owner_id);
        assert_eq!(
            created.description.as_deref(),
            Some("First mass-produced car")
        );
    }

    #[tokio::test]
    async fn test_create_vehicle_database_error() {
        let mut repository = MockTestVehicleRepository::new();

        repository
            .expect_insert()
            .times(1)
            .returning(|_| Err(VehicleError::DatabaseError("connection reset".to_string())));

        let service = VehicleService::new(Arc::new(repository));

        let command = CreateVehicleCommand::new(
            VehicleName::new("Model T".to_string()).unwrap(),
            VehicleType::new("car".to_string()).unwrap(),
            None,
            None,
        );
        let owner = VehicleOwner {
            id: UserId::new(),
            email: "b@x.com".to_string(),
        };

        let result = service.create_vehicle(command, owner).await;
        assert!(matches!(result, Err(VehicleError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_list_vehicles_by_type() {
        let mut repository = MockTestVehicleRepository::new();

        repository
            .expect_find_by_type()
            .withf(|vehicle_type| vehicle_type.as_ref().map(|t| t.as_str()) == Some("bike"))
            .times(1)
            .returning(|_| Ok(vec![vehicle("Roadster", "bike")]));

        let service = VehicleService::new(Arc::new(repository));

        let bike = VehicleType::new("bike".to_string()).unwrap();
        let vehicles = service
            .list_vehicles(Some(bike.clone()))
            .await
            .expect("Failed to list vehicles");

        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].vehicle_type, bike);
    }

    #[tokio::test]
    async fn test_list_all_vehicles() {
        let mut repository = MockTestVehicleRepository::new();

        repository
            .expect_find_by_type()
            .withf(|vehicle_type| vehicle_type.is_none())
            .times(1)
            .returning(|_| Ok(vec![vehicle("Model T", "car"), vehicle("Roadster", "bike")]));

        let service = VehicleService::new(Arc::new(repository));

        let vehicles = service
            .list_vehicles(None)
            .await
            .expect("Failed to list vehicles");

        assert_eq!(vehicles.len(), 2);
    }
}
