pub mod user;
pub mod vehicle;

pub use user::PostgresUserRepository;
pub use vehicle::PostgresVehicleRepository;
