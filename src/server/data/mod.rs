//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic.

pub mod car;
pub mod user;

#[cfg(test)]
mod test;
