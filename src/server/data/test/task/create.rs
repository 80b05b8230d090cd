use super::*;

/// Tests creating a task for an existing user.
///
/// Expected: Ok with task referencing the user
#[tokio::test]
async fn creates_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParam {
            title: "Write report".to_string(),
            user_id: user.id,
        })
        .await?;

    assert_eq!(task.title, "Write report");
    assert_eq!(task.user_id, user.id);

    let db_task = entity::prelude::Task::find_by_id(task.id).one(db).await?;
    assert!(db_task.is_some());
    assert_eq!(db_task.unwrap().user_id, user.id);

    Ok(())
}

/// Tests that the owning user is not required to exist.
///
/// Expected: Ok with task referencing the unknown identifier
#[tokio::test]
async fn creates_task_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unknown = Uuid::new_v4();

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParam {
            title: "Orphan".to_string(),
            user_id: unknown,
        })
        .await?;

    assert_eq!(task.user_id, unknown);

    Ok(())
}
