use super::*;

/// Tests fetching several users at once.
///
/// Expected: Ok with only the requested users
#[tokio::test]
async fn finds_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let _other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let mut found: Vec<Uuid> = repo
        .find_by_ids(&[first.id, second.id])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    found.sort();

    let mut expected = vec![first.id, second.id];
    expected.sort();

    assert_eq!(found, expected);

    Ok(())
}

/// Tests that unknown identifiers are skipped rather than failing.
///
/// Expected: Ok with only the existing user
#[tokio::test]
async fn skips_unknown_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_ids(&[user.id, Uuid::new_v4()]).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, user.id);

    Ok(())
}

/// Tests that an empty identifier list short-circuits.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_no_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_taskboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_ids(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
