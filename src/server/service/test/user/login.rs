use super::*;

/// Tests that login fails explicitly rather than returning an empty result.
///
/// Expected: Err(AuthErr(LoginNotImplemented))
#[tokio::test]
async fn login_is_not_implemented() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db();

    factory::create_user(db).await?;

    let service = UserService::new(UserRepository::new(db));
    let result = service
        .login(Credentials {
            username: "ana".to_string(),
            password: "secret".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::LoginNotImplemented))
    ));

    Ok(())
}
