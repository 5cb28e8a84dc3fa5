use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with an unverified user and one verification email linking to it
#[tokio::test]
async fn creates_user_and_sends_verification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let user = service(db, &mailer).create_user(signup("steve")).await?;

    assert!(!user.is_verified);
    assert!(user.roles.is_empty());

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "steve@example.com");
    assert_eq!(sent[0].from, SENDER);
    assert!(sent[0]
        .body
        .contains(&format!("{APP_URL}/auth/verify/{}/", user.id)));

    Ok(())
}

/// Tests registering with a username that is taken.
///
/// Expected: Err(Conflict) and no email sent
#[tokio::test]
async fn duplicate_username_conflicts_without_mail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    factory::user::UserFactory::new(db)
        .username("steve")
        .build()
        .await?;

    let result = service(db, &mailer).create_user(signup("steve")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests registering with a password below the minimum length.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn short_password_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let result = service(db, &mailer)
        .create_user(CreateUserParam {
            password: "short".to_string(),
            ..signup("alex")
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests registering while the mail relay is down.
///
/// Expected: Err(Upstream) but the account is stored
#[tokio::test]
async fn mail_failure_surfaces_after_create() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::failing();
    let service = service(db, &mailer);

    let result = service.create_user(signup("steve")).await;
    assert!(matches!(result, Err(AppError::Upstream(_))));

    let retry = service.create_user(signup("steve")).await;
    assert!(matches!(retry, Err(AppError::Conflict(_))));

    Ok(())
}
