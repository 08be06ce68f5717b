use super::*;

/// Tests that a patch without a name keeps the stored name.
///
/// Expected: Ok with name unchanged and document id replaced
#[tokio::test]
async fn keeps_fields_missing_from_patch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let service = UserService::new(UserRepository::new(db));
    let created = service.create(new_user("Ana", "DOC1")).await?;
    let id = created.id.unwrap();

    let updated = service
        .update(
            id,
            UserPatch {
                name: None,
                document_id: Some("DOC2".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Ana");
    assert_eq!(updated.document_id, "DOC2");
    assert_eq!(service.get_by_id(id).await?, updated);

    Ok(())
}

/// Tests replacing every attribute.
///
/// Expected: Ok with both fields replaced and the id kept
#[tokio::test]
async fn replaces_all_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let stored = factory::create_user(db).await?;

    let service = UserService::new(UserRepository::new(db));
    let updated = service
        .update(
            stored.id,
            UserPatch {
                name: Some("Bruno".to_string()),
                document_id: Some("DOC7".to_string()),
            },
        )
        .await?;

    assert_eq!(
        updated,
        UserDto {
            id: Some(stored.id),
            name: "Bruno".to_string(),
            document_id: "DOC7".to_string(),
        }
    );

    Ok(())
}

/// Tests updating an id that was never created.
///
/// Expected: Err(UserErr(NotFound(id)))
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let service = UserService::new(UserRepository::new(db));
    let result = service.update(404, UserPatch::default()).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotFound(404)))
    ));

    Ok(())
}
