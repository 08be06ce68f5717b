use super::*;

/// Tests saving a user without an id.
///
/// Verifies that the database assigns the identifier on insert.
///
/// Expected: Ok with id assigned and fields persisted
#[tokio::test]
async fn inserts_new_user_and_assigns_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let saved = repo
        .save(User {
            id: None,
            name: "Ana".to_string(),
            document_id: "DOC1".to_string(),
        })
        .await?;

    let id = saved.id.expect("id should be assigned");
    let stored = repo.find_by_id(id).await?.unwrap();
    assert_eq!(stored, saved);
    assert_eq!(stored.name, "Ana");
    assert_eq!(stored.document_id, "DOC1");

    Ok(())
}

/// Tests that consecutive inserts receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let first = repo
        .save(User {
            id: None,
            name: "Ana".to_string(),
            document_id: "DOC1".to_string(),
        })
        .await?;
    let second = repo
        .save(User {
            id: None,
            name: "Bruno".to_string(),
            document_id: "DOC2".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests saving a user that already has an id.
///
/// Verifies that the matching record is overwritten rather than duplicated.
///
/// Expected: Ok with the record updated and the row count unchanged
#[tokio::test]
async fn overwrites_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let saved = repo
        .save(User {
            id: Some(created.id),
            name: "Renamed".to_string(),
            document_id: "DOC9".to_string(),
        })
        .await?;

    assert_eq!(saved.id, Some(created.id));
    assert_eq!(saved.name, "Renamed");

    let all = repo.find_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].document_id, "DOC9");

    Ok(())
}

/// Tests saving with an id that is not stored.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_to_overwrite_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let result = repo
        .save(User {
            id: Some(42),
            name: "Ghost".to_string(),
            document_id: "DOC0".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
