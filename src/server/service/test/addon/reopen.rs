use super::*;

/// Tests an author reopening a denied add-on.
///
/// Expected: Ok with status pending, reason cleared and the author recorded
#[tokio::test]
async fn author_reopens_denied_addon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::AddonFactory::new(db)
        .authors(&["u1"])
        .status("denied")
        .build()
        .await?;

    let addon = AddonService::new(db)
        .reopen(&author("u1"), &stored.id)
        .await?;

    assert_eq!(addon.approval.status, ReviewStatus::Pending);
    assert_eq!(addon.approval.reason, None);
    assert_eq!(addon.approval.author.as_deref(), Some("u1"));

    Ok(())
}

/// Tests reopening an add-on that is still pending.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn pending_addon_cannot_be_reopened() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::create_addon(db, &["u1"]).await?;

    let result = AddonService::new(db).reopen(&author("u1"), &stored.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
