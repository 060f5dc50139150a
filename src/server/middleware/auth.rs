use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{car::CarRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// The user owns the car with this id.
    CarOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - User is logged in and holds all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::CarNotFound)` - A checked car does not exist
    /// - `Err(AuthError::AccessDenied)` - The user does not own a checked car
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(username) = AuthSession::new(self.session).get_username().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_username(&username).await? else {
            return Err(AuthError::UserNotInDatabase(username).into());
        };

        for permission in permissions {
            match permission {
                Permission::CarOwner(car_id) => {
                    let car_repo = CarRepository::new(self.db);

                    let Some(car) = car_repo.find_by_id(*car_id).await? else {
                        return Err(AuthError::CarNotFound(*car_id).into());
                    };

                    if !car.is_owned_by(&user.username) {
                        return Err(AuthError::AccessDenied(
                            user.username,
                            format!("User attempted to access car {} owned by someone else", car_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
