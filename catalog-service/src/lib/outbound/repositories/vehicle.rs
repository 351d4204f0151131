use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::VehicleName;
use crate::domain::vehicle::models::VehicleType;
use crate::domain::vehicle::ports::VehicleRepository;

pub struct PostgresVehicleRepository {
    pool: PgPool,
}

impl PostgresVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    name: String,
    vehicle_type: String,
    description: Option<String>,
    image_url: Option<String>,
    owner_id: Uuid,
    owner_email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = VehicleError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        Ok(Vehicle {
            id: VehicleId(row.id),
            name: VehicleName::new(row.name)?,
            vehicle_type: VehicleType::new(row.vehicle_type)?,
            description: row.description,
            image_url: row.image_url,
            owner_id: UserId(row.owner_id),
            owner_email: row.owner_email,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn insert(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError> {
        sqlx::query(
            r#"
            INSERT INTO vehicles
                (id, name, vehicle_type, description, image_url, owner_id, owner_email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(vehicle.id.0)
        .bind(vehicle.name.as_str())
        .bind(vehicle.vehicle_type.as_str())
        .bind(vehicle.description.as_deref())
        .bind(vehicle.image_url.as_deref())
        .bind(vehicle.owner_id.0)
        .bind(&vehicle.owner_email)
        .bind(vehicle.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        Ok(vehicle)
    }

    async fn find_by_type(
        &self,
        vehicle_type: Option<VehicleType>,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, vehicle_type, description, image_url, owner_id, owner_email, created_at
            FROM vehicles
            WHERE $1::text IS NULL OR vehicle_type = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(vehicle_type.as_ref().map(VehicleType::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Vehicle::try_from).collect()
    }
}
