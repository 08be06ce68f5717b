use super::*;

/// Tests finding an existing user by id.
///
/// Verifies that the repository converts the stored row into a domain model with
/// its assigned id.
///
/// Expected: Ok(Some(user)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let created = factory::user::UserFactory::new(db)
        .name("Ana")
        .document_id("DOC1")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert_eq!(
        user,
        Some(User {
            id: Some(created.id),
            name: "Ana".to_string(),
            document_id: "DOC1".to_string(),
        })
    );

    Ok(())
}

/// Tests finding a user that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(999_999).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(1).await;

    assert!(result.is_err());

    Ok(())
}
