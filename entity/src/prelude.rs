pub use super::car::Entity as Car;
pub use super::user::Entity as User;
