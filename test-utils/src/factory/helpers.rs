//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a single task owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, task))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::task::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let task = crate::factory::task::create_task(db, user.id).await?;

    Ok((user, task))
}

/// Creates a user owning `count` tasks.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of tasks to create for the user
///
/// # Returns
/// - `Ok((user, tasks))` - Created user and its tasks in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_tasks(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::user::Model, Vec<entity::task::Model>), DbErr> {
    let user = crate::factory::user::create_user(db).await?;

    let mut tasks = Vec::with_capacity(count);
    for _ in 0..count {
        tasks.push(crate::factory::task::create_task(db, user.id).await?);
    }

    Ok((user, tasks))
}
