//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{error::AppError, validation::Validate},
};

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-generated identifier.
    pub id: Uuid,
    /// Lowercased, unique username.
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Username as submitted; normalized by the repository on insert.
    pub username: String,
}

impl CreateUserParam {
    /// Validates the request DTO and converts it into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - The request passed every rule
    /// - `Err(AppError::Validation)` - The username is missing or blank
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        dto.validate()?;

        Ok(Self {
            username: dto.username.unwrap_or_default(),
        })
    }
}
