//! HTTP request handlers.
//!
//! Controllers extract request data, run it through validation into parameter
//! models, call the matching service and wrap the result in the response
//! envelope. Failures are returned as `AppError` and rendered by its
//! `IntoResponse` implementation.

pub mod health;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;
