use super::*;

/// Tests replacing the role list.
///
/// Expected: Ok with the new roles and other stored fields untouched
#[tokio::test]
async fn replaces_roles_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .id("u1")
        .username("alice")
        .roles(&["Council"])
        .build()
        .await?;

    let user = UserRepository::new(db)
        .set_roles("u1", &[Role::Council, Role::Moderator])
        .await?;

    assert_eq!(user.roles, vec![Role::Council, Role::Moderator]);
    assert_eq!(user.username, "alice");

    let stored = DocumentStore::new(db)
        .collection("users")
        .get("u1")
        .await?
        .unwrap();
    assert!(stored.contains_key("password_hash"));

    Ok(())
}

/// Tests setting roles on an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).set_roles("nobody", &[]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
