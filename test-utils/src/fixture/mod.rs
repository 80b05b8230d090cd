//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversions and response shaping.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let task = fixture::task::entity_builder().user_id(user.id).build();
//! ```

pub mod task;
pub mod user;
