use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository assigns an identifier and timestamps and
/// persists the record.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "alice".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.created_at, user.updated_at);

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().username, "alice");

    Ok(())
}

/// Tests that usernames are stored trimmed and lowercased.
///
/// Expected: Ok with normalized username
#[tokio::test]
async fn normalizes_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "  MixedCase ".to_string(),
        })
        .await?;

    assert_eq!(user.username, "mixedcase");

    Ok(())
}

/// Tests that each created user gets its own identifier.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            username: "first".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            username: "second".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that a username differing only in case collides with an existing one.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_case_insensitive_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_username(db, "carol").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "CAROL".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that creating a user without the users table fails.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_users_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "dave".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
