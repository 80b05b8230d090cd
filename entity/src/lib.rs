//! SeaORM entities for the taskboard store.

pub mod prelude;

pub mod task;
pub mod user;
