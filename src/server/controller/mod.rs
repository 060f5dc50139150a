pub mod auth;
pub mod status;
pub mod token;
