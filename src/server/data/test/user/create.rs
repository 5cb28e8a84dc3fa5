use super::*;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "hash".to_string(),
        password_salt: "salt".to_string(),
        verification_token: "token".to_string(),
    }
}

/// Tests creating an account.
///
/// Expected: unverified user without roles, password material kept out of the
/// domain model but present in the stored record
#[tokio::test]
async fn creates_unverified_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).create(new_user("alice")).await?;

    assert!(!user.is_verified);
    assert!(user.roles.is_empty());
    assert_eq!(user.verification_token.as_deref(), Some("token"));

    let stored = DocumentStore::new(db)
        .collection("users")
        .get(&user.id)
        .await?
        .unwrap();
    assert_eq!(stored["password_hash"], serde_json::json!("hash"));

    Ok(())
}

/// Tests the username and email uniqueness check.
///
/// Expected: true for a taken username or an email differing only in case
#[tokio::test]
async fn detects_taken_username_or_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).username("alice").build().await?;
    let repo = UserRepository::new(db);

    assert!(repo.username_or_email_taken("alice", "new@example.com").await?);
    assert!(repo.username_or_email_taken("new", "ALICE@example.com").await?);
    assert!(!repo.username_or_email_taken("new", "new@example.com").await?);

    Ok(())
}
