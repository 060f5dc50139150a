//! Car data repository.
//!
//! Only the lookups the status bridge and device registration need; car management
//! lives elsewhere.

use crate::server::model::car::Car;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a car by id.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Car found
    /// - `Ok(None)` - No car with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, car_id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(car_id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Replaces the push token of a car's device.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Updated car
    /// - `Ok(None)` - No car with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_firebase_token(
        &self,
        car_id: i32,
        token: String,
    ) -> Result<Option<Car>, DbErr> {
        let Some(entity) = entity::prelude::Car::find_by_id(car_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::car::ActiveModel = entity.into();
        active.firebase_token = ActiveValue::Set(token);
        let updated = active.update(self.db).await?;

        Ok(Some(Car::from_entity(updated)))
    }
}
