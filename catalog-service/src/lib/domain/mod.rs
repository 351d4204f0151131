pub mod user;
pub mod vehicle;
