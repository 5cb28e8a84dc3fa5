use super::*;

/// Tests a logged-in user with roles.
///
/// Verifies that the guard loads the user document and carries its roles into
/// the principal.
///
/// Expected: Ok((User, Principal)) with matching id and roles
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_document_store().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let stored = factory::user::UserFactory::new(db)
        .username("Juknum")
        .roles(&["Administrator", "Developer"])
        .build()
        .await?;
    AuthSession::new(session).set_user_id(&stored.id).await?;

    let (user, principal) = AuthGuard::new(db, session).require().await?;

    assert_eq!(user.username, "Juknum");
    assert_eq!(principal.user_id, stored.id);
    assert_eq!(principal.roles, vec![Role::Administrator, Role::Developer]);

    Ok(())
}

/// Tests a request without a session user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_document_store().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session naming a user that was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the id
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_document_store().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id("404").await?;

    let result = AuthGuard::new(db, session).require().await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, "404"),
        other => panic!("expected UserNotInDatabase, got {:?}", other.map(|(u, _)| u)),
    }

    Ok(())
}
