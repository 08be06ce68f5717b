use super::*;

/// Tests fetching a stored user.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let stored = factory::create_user(db).await?;

    let service = UserService::new(UserRepository::new(db));
    let user = service.get_by_id(stored.id).await?;

    assert_eq!(user.id, Some(stored.id));
    assert_eq!(user.name, stored.name);
    assert_eq!(user.document_id, stored.document_id);

    Ok(())
}

/// Tests fetching an id that was never created.
///
/// Expected: Err(UserErr(NotFound(id)))
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let service = UserService::new(UserRepository::new(db));
    let result = service.get_by_id(999).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotFound(999)))
    ));

    Ok(())
}
