use super::*;

/// Tests a user deleting their own account.
///
/// Expected: Ok, a deletion email, and NotFound on a second delete
#[tokio::test]
async fn self_delete_sends_mail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let stored = factory::user::create_user(db).await?;
    let me = Principal::new(stored.id.clone(), vec![]);

    let user = service.delete(&me, &stored.id).await?;

    assert_eq!(mailer.sent().len(), 1);
    assert_eq!(mailer.sent()[0].to, user.email);
    assert!(matches!(
        service.delete(&me, &stored.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting another user's account without administrator rights.
///
/// Expected: Err(Permission) and the account is kept
#[tokio::test]
async fn cannot_delete_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::new();
    let service = service(db, &mailer);

    let stored = factory::user::create_user(db).await?;

    let result = service
        .delete(&Principal::new("other", vec![Role::Moderator]), &stored.id)
        .await;

    assert!(matches!(result, Err(AppError::Permission(_))));
    assert!(service.get_by_id(&stored.id).await.is_ok());

    Ok(())
}
