//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Classifying store failures into application errors
//! - **Orchestration**: Coordinating multiple repository calls, such as populating
//!   task owners
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod task;
pub mod user;
