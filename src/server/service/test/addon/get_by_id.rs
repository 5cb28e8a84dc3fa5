use super::*;

/// Tests reading a denied add-on without being its author or staff.
///
/// Expected: Err(NotFound) for anonymous and unrelated callers, so the denial
/// reason stays private
#[tokio::test]
async fn denied_addon_hidden_from_strangers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AddonService::new(db);

    let addon = service.create(&author("u1"), body("Secret", &["u1"])).await?;
    service
        .review(&moderator(), &addon.id, deny("plagiarism"))
        .await?;

    assert!(matches!(
        service.get_by_id(&addon.id, None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_by_id(&addon.id, Some(&author("u2"))).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests reading a denied add-on as its author and as staff.
///
/// Expected: Ok with the denial reason for both
#[tokio::test]
async fn denied_addon_visible_to_author_and_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AddonService::new(db);

    let addon = service.create(&author("u1"), body("Secret", &["u1"])).await?;
    service
        .review(&moderator(), &addon.id, deny("plagiarism"))
        .await?;

    let as_author = service.get_by_id(&addon.id, Some(&author("u1"))).await?;
    let as_staff = service.get_by_id(&addon.id, Some(&moderator())).await?;

    assert_eq!(as_author.approval.reason.as_deref(), Some("plagiarism"));
    assert_eq!(as_staff.approval.reason.as_deref(), Some("plagiarism"));

    Ok(())
}

/// Tests reading an approved add-on without a session.
///
/// Expected: Ok
#[tokio::test]
async fn approved_addon_is_public() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::AddonFactory::new(db)
        .status("approved")
        .build()
        .await?;

    let addon = AddonService::new(db).get_by_id(&stored.id, None).await?;

    assert_eq!(addon.approval.status, ReviewStatus::Approved);

    Ok(())
}
