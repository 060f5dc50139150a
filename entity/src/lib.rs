//! SeaORM entities for the car security backend.

pub mod prelude;

pub mod car;
pub mod user;
