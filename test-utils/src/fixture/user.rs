//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;
use uuid::Uuid;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Default test user id.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x6f1c_2a4e_8b3d_4c5f_9a7e_1d2b3c4d5e6f);

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `DEFAULT_ID`
/// - username: `"testuser"`
/// - created_at / updated_at: `2026-01-01T00:00:00Z`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: Uuid,
    username: String,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn build(self) -> user::Model {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        user::Model {
            id: self.id,
            username: self.username,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
