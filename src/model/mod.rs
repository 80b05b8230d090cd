//! Request and response DTOs exchanged over the HTTP API.

pub mod api;
pub mod health;
pub mod task;
pub mod user;
