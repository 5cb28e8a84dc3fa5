use super::*;

/// Tests an anonymous request through the optional guard.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_is_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_document_store().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    assert!(AuthGuard::new(db, session).optional().await?.is_none());

    Ok(())
}

/// Tests a logged-in request through the optional guard, then after logout.
///
/// Expected: Some(principal) before clearing the session, None after
#[tokio::test]
async fn logged_in_is_some_until_cleared() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_document_store().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let stored = factory::user::create_user_with_role(db, "Moderator").await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(&stored.id).await?;

    let principal = AuthGuard::new(db, session).optional().await?;
    assert!(principal.is_some_and(|p| p.is_staff()));

    auth_session.clear().await;
    assert!(AuthGuard::new(db, session).optional().await?.is_none());

    Ok(())
}
