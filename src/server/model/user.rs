//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Authenticated user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Login name issued by the authorization server, unique per user.
    pub username: String,
    /// Display name of the user.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating or updating a user after login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub username: String,
    pub name: String,
}
