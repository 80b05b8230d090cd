use super::*;

/// Tests listing tasks for a user with several tasks.
///
/// Verifies that only that user's tasks are returned, oldest first.
///
/// Expected: Ok with exactly the user's tasks
#[tokio::test]
async fn returns_tasks_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tasks) = factory::helpers::create_user_with_tasks(db, 3).await?;
    let (_other_user, _other_task) = factory::helpers::create_task_with_user(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.get_by_user_id(user.id).await?;

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|t| t.user_id == user.id));

    let mut expected: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();
    let mut actual: Vec<Uuid> = result.iter().map(|t| t.id).collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);

    assert!(result
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));

    Ok(())
}

/// Tests listing tasks for a user with none.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_user_without_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::helpers::create_task_with_user(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.get_by_user_id(user.id).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing tasks for an identifier no user has.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let result = repo.get_by_user_id(Uuid::new_v4()).await?;

    assert!(result.is_empty());

    Ok(())
}
