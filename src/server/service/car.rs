//! Device registration for cars.

use sea_orm::DatabaseConnection;

use crate::server::{data::car::CarRepository, error::AppError, model::car::Car};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the push token of the device installed in a car.
    ///
    /// Replaces any previously registered token; later status requests are pushed to the
    /// new device.
    ///
    /// # Returns
    /// - `Ok(Car)` - Car with the new token
    /// - `Err(AppError::BadRequest)` - Token is blank or the car does not exist
    pub async fn register_device_token(&self, car_id: i32, token: String) -> Result<Car, AppError> {
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(AppError::BadRequest("Empty token".to_string()));
        }

        let car_repo = CarRepository::new(self.db);
        let Some(car) = car_repo.update_firebase_token(car_id, token).await? else {
            return Err(AppError::BadRequest("Car does not exist".to_string()));
        };

        tracing::debug!("Registered device token for car {}", car.id);

        Ok(car)
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Tests the new token replaces the stored one.
    ///
    /// Expected: Ok(Car) with the trimmed token
    #[tokio::test]
    async fn stores_token() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
        let db = test.database().await.unwrap();
        let (_owner, car) = factory::create_car_with_owner(db).await?;

        let updated = CarService::new(db)
            .register_device_token(car.id, " new-token ".to_string())
            .await?;

        assert_eq!(updated.firebase_token, "new-token");

        Ok(())
    }

    /// Tests a blank token is rejected without touching the car.
    ///
    /// Expected: Err(AppError::BadRequest) and the old token kept
    #[tokio::test]
    async fn rejects_blank_token() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
        let db = test.database().await.unwrap();
        let (_owner, car) = factory::create_car_with_owner(db).await?;

        let result = CarService::new(db)
            .register_device_token(car.id, "   ".to_string())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == "Empty token"));

        let stored = CarRepository::new(db).find_by_id(car.id).await?.unwrap();
        assert_eq!(stored.firebase_token, car.firebase_token);

        Ok(())
    }

    /// Tests a token for an unknown car is rejected.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_unknown_car() -> Result<(), AppError> {
        let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
        let db = test.database().await.unwrap();

        let result = CarService::new(db)
            .register_device_token(77, "token".to_string())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == "Car does not exist"));

        Ok(())
    }
}
