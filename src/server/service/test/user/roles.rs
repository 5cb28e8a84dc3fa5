use super::*;

/// Tests granting the same role twice.
///
/// Expected: the role appears exactly once
#[tokio::test]
async fn add_role_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let stored = factory::user::create_user_with_role(db, "Translator").await?;

    service.add_role(&admin(), &stored.id, "Moderator").await?;
    let user = service.add_role(&admin(), &stored.id, "Moderator").await?;

    assert_eq!(user.roles, vec![Role::Translator, Role::Moderator]);

    Ok(())
}

/// Tests revoking a held role and one that is not held.
///
/// Expected: the held role is removed, the other call changes nothing
#[tokio::test]
async fn delete_role_removes_only_that_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let stored = factory::user::UserFactory::new(db)
        .roles(&["Council", "Developer"])
        .build()
        .await?;

    let user = service.delete_role(&admin(), &stored.id, "Council").await?;
    assert_eq!(user.roles, vec![Role::Developer]);

    let user = service.delete_role(&admin(), &stored.id, "Council").await?;
    assert_eq!(user.roles, vec![Role::Developer]);

    Ok(())
}

/// Tests granting a role that does not exist.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn unknown_role_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();

    let stored = factory::user::create_user(db).await?;

    let result = service(db, &mailer)
        .add_role(&admin(), &stored.id, "Overlord")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests role changes for an unknown user and by a non-administrator.
///
/// Expected: Err(NotFound) and Err(Permission)
#[tokio::test]
async fn role_changes_need_admin_and_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let stored = factory::user::create_user(db).await?;

    let missing = service.add_role(&admin(), "404", "Moderator").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let denied = service
        .add_role(
            &Principal::new("m", vec![Role::Moderator]),
            &stored.id,
            "Moderator",
        )
        .await;
    assert!(matches!(denied, Err(AppError::Permission(_))));

    Ok(())
}
