use super::*;

/// Tests verifying with the token from the verification email.
///
/// Expected: true once, false when the same token is replayed
#[tokio::test]
async fn token_from_email_verifies_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let user = service.create_user(signup("steve")).await?;
    let body = &mailer.sent()[0].body;
    let prefix = format!("/auth/verify/{}/", user.id);
    let token: String = body
        .split(prefix.as_str())
        .nth(1)
        .unwrap()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    assert!(service.verify(&user.id, &token).await?);
    assert!(service.get_by_id(&user.id).await?.is_verified);
    assert!(!service.verify(&user.id, &token).await?);

    Ok(())
}

/// Tests verifying with a wrong token.
///
/// Expected: false and the user stays unverified
#[tokio::test]
async fn wrong_token_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let stored = factory::user::UserFactory::new(db)
        .unverified("right-token")
        .build()
        .await?;

    assert!(!service.verify(&stored.id, "wrong-token").await?);
    assert!(!service.get_by_id(&stored.id).await?.is_verified);

    Ok(())
}
