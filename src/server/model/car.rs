//! Car domain model.

/// Car guarded by the device installed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i32,
    /// Username of the owning user.
    pub username: String,
    pub name: String,
    pub note: String,
    /// Push token of the car's device, empty until the device registers one.
    pub firebase_token: String,
}

impl Car {
    /// Converts an entity model to a car domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            note: entity.note,
            firebase_token: entity.firebase_token,
        }
    }

    /// Returns whether `username` owns this car.
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.username == username
    }
}
