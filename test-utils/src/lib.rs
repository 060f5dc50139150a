//! Car Security Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the car
//! security backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, a session bound to the same database, and entity factories.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users and cars with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_car_operations() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_car_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
