//! Wire DTOs exchanged with the mobile client and the in-car device.

pub mod api;
pub mod status;
pub mod user;
