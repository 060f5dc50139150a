//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars owned by an existing user.
///
/// The owner must already exist since `car.username` references `user.username`.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db, &owner.username)
///     .name("Octavia")
///     .firebase_token("device-token")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    name: String,
    note: String,
    firebase_token: String,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"`
    /// - note: empty
    /// - firebase_token: `"token_{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `username` - Username of the owning user
    pub fn new(db: &'a DatabaseConnection, username: &str) -> Self {
        let id = next_id();
        Self {
            db,
            username: username.to_string(),
            name: format!("Car {}", id),
            note: String::new(),
            firebase_token: format!("token_{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets the device push token; pass an empty string for a car whose device
    /// never registered.
    pub fn firebase_token(mut self, token: impl Into<String>) -> Self {
        self.firebase_token = token.into();
        self
    }

    /// Builds and inserts the car entity into the database.
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            username: ActiveValue::Set(self.username),
            name: ActiveValue::Set(self.name),
            note: ActiveValue::Set(self.note),
            firebase_token: ActiveValue::Set(self.firebase_token),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values owned by `username`.
pub async fn create_car(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, username).build().await
}
