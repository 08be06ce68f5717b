use super::*;

/// Tests existence check for a stored user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_stored_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_id(user.id).await?);

    Ok(())
}

/// Tests existence check for an unknown id, including after deletion.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_or_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.exists_by_id(user.id + 1).await?);

    repo.delete_by_id(user.id).await?;
    assert!(!repo.exists_by_id(user.id).await?);

    Ok(())
}
