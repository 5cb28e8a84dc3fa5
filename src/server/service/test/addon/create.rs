use super::*;

/// Tests submitting an add-on as one of its authors.
///
/// Expected: Ok with a pending add-on
#[tokio::test]
async fn creates_pending_addon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let addon = AddonService::new(db)
        .create(&author("u1"), body("Connected Glass", &["u1", "u2"]))
        .await?;

    assert_eq!(addon.approval.status, ReviewStatus::Pending);
    assert_eq!(addon.authors, vec!["u1".to_string(), "u2".to_string()]);

    Ok(())
}

/// Tests submitting an add-on that does not list the requester.
///
/// Expected: Err(Validation) and nothing stored
#[tokio::test]
async fn rejects_body_without_requester() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AddonService::new(db);

    let result = service
        .create(&author("u1"), body("Connected Glass", &["u2"]))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.get_raw(&moderator()).await?.is_empty());

    Ok(())
}

/// Tests submitting an add-on under a name already in use.
///
/// Expected: Err(Conflict) regardless of casing
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::addon::AddonFactory::new(db)
        .name("Connected Glass")
        .authors(&["u9"])
        .build()
        .await?;

    let result = AddonService::new(db)
        .create(&author("u1"), body("CONNECTED GLASS", &["u1"]))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
