use super::*;

/// Tests listing users from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let users = repo.find_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing every stored user.
///
/// Expected: Ok with one entry per stored row, all with assigned ids
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("Ana", "DOC1")
        .with_users(2)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(test.db());
    let users = repo.find_all().await?;

    assert_eq!(users.len(), 3);
    for row in test.users() {
        assert!(users.iter().any(|u| u.id == Some(row.id) && u.name == row.name));
    }

    Ok(())
}
