use super::*;

/// Tests verification with the stored token.
///
/// Expected: true, user verified and token removed
#[tokio::test]
async fn verifies_with_matching_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .id("u1")
        .unverified("abc123")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(repo.verify("u1", "abc123").await?);

    let user = repo.get_by_id("u1").await?;
    assert!(user.is_verified);
    assert_eq!(user.verification_token, None);

    // The token is single use
    assert!(!repo.verify("u1", "abc123").await?);

    Ok(())
}

/// Tests verification with a wrong token or unknown id.
///
/// Expected: false and the user left unverified
#[tokio::test]
async fn rejects_mismatched_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .id("u1")
        .unverified("abc123")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(!repo.verify("u1", "wrong").await?);
    assert!(!repo.verify("u2", "abc123").await?);

    let user = repo.get_by_id("u1").await?;
    assert!(!user.is_verified);
    assert_eq!(user.verification_token.as_deref(), Some("abc123"));

    Ok(())
}
