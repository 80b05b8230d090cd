//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Usernames are normalized here, at the storage boundary, so the unique index on
//! `users.username` enforces case-insensitive uniqueness.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParam, User};

/// Normalizes a username into its stored form: trimmed and lowercased.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a generated identifier and fresh timestamps.
    ///
    /// # Arguments
    /// - `param` - Creation parameters; the username is normalized before insert
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   normalized username is already taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(normalize_username(&param.username)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds every user whose identifier is in `ids`.
    ///
    /// Identifiers with no matching user are skipped, so the result may be
    /// shorter than the input.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users (empty if `ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
