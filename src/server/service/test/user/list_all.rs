use super::*;

/// Tests listing with no users stored.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let service = UserService::new(UserRepository::new(db));

    assert!(service.list_all().await?.is_empty());

    Ok(())
}

/// Tests that listing tracks creates and deletes.
///
/// Expected: N entries after N creates, N-1 after one delete
#[tokio::test]
async fn reflects_creates_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    let service = UserService::new(UserRepository::new(db));

    let mut ids = Vec::new();
    for n in 0..4 {
        let created = service
            .create(new_user(&format!("User {}", n), &format!("DOC{}", n)))
            .await?;
        ids.push(created.id.unwrap());
    }

    let users = service.list_all().await?;
    assert_eq!(users.len(), 4);
    for id in &ids {
        assert!(users.iter().any(|u| u.id == Some(*id)));
    }

    service.delete(ids[1]).await?;

    let users = service.list_all().await?;
    assert_eq!(users.len(), 3);
    assert!(!users.iter().any(|u| u.id == Some(ids[1])));

    Ok(())
}
