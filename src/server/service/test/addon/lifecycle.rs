use super::*;

/// Tests the full review loop: submit, deny, edit attempt, reopen, edit.
///
/// Expected: the edit is refused while denied and accepted after reopening
#[tokio::test]
async fn deny_then_reopen_then_edit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AddonService::new(db);
    let u1 = author("u1");

    let addon = service.create(&u1, body("Glass", &["u1"])).await?;

    let denied = service
        .review(&moderator(), &addon.id, deny("low quality"))
        .await?;
    assert_eq!(denied.approval.status, ReviewStatus::Denied);
    assert_eq!(denied.approval.reason.as_deref(), Some("low quality"));

    let blocked = service
        .update(&u1, &addon.id, body("Glass HD", &["u1"]))
        .await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    service.reopen(&u1, &addon.id).await?;
    let edited = service
        .update(&u1, &addon.id, body("Glass HD", &["u1"]))
        .await?;

    assert_eq!(edited.name, "Glass HD");
    assert_eq!(edited.approval.status, ReviewStatus::Pending);
    assert_eq!(edited.approval.reason, None);

    Ok(())
}
