//! User service for business logic.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::{normalize_username, UserRepository},
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the requested username
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated identifier and timestamps
    /// - `Err(AppError::Conflict)` - The username, compared case-insensitively, is taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let username = normalize_username(&param.username);
        let user_repo = UserRepository::new(self.db);

        user_repo
            .create(param)
            .await
            .map_err(|err| classify_create_error(err, &username))
    }
}

fn classify_create_error(err: DbErr, username: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("Username '{}' is already taken", username))
        }
        _ => AppError::DbErr(err),
    }
}
