//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let car = factory::car::CarFactory::new(&db, &owner.username)
//!     .firebase_token("device-token")
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod helpers;
pub mod user;

pub use car::create_car;
pub use helpers::create_car_with_owner;
pub use user::create_user;
