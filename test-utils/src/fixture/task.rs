//! Task fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::task;
use uuid::Uuid;

use crate::fixture::user;

/// Default test task title.
pub const DEFAULT_TITLE: &str = "Test Task";

/// Default test task id.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x0a9b_8c7d_6e5f_4a3b_8c2d_1e0f9a8b7c6d);

/// Creates a task entity model owned by the default fixture user.
pub fn entity() -> task::Model {
    entity_builder().build()
}

/// Creates a task entity builder for customization.
pub fn entity_builder() -> TaskEntityBuilder {
    TaskEntityBuilder::default()
}

/// Builder for creating customized task entity models.
pub struct TaskEntityBuilder {
    id: Uuid,
    title: String,
    user_id: Uuid,
}

impl Default for TaskEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            title: DEFAULT_TITLE.to_string(),
            user_id: user::DEFAULT_ID,
        }
    }
}

impl TaskEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn build(self) -> task::Model {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        task::Model {
            id: self.id,
            title: self.title,
            user_id: self.user_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
