//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, push dispatch and the status bridge
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, status bridge)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions, and services
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Status Flow
//!
//! 1. The owner's `GET /status` registers a waiter for the car and pushes a command
//!    to the car's device
//! 2. The device answers with `POST /status` on a separate connection
//! 3. The bridge hands the payload to the waiting request, which returns it as the
//!    response, or answers 408 once the timeout passes

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
