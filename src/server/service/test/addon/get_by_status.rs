use super::*;

/// Tests listing approved add-ons without a session.
///
/// Expected: Ok with only the approved add-on
#[tokio::test]
async fn approved_listing_is_public() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let approved = factory::addon::AddonFactory::new(db)
        .status("approved")
        .build()
        .await?;
    factory::addon::create_addon(db, &["u1"]).await?;

    let addons = AddonService::new(db)
        .get_by_status(ReviewStatus::Approved, None)
        .await?;

    assert_eq!(addons.len(), 1);
    assert_eq!(addons[0].id, approved.id);

    Ok(())
}

/// Tests listing pending add-ons with and without a staff role.
///
/// Expected: Err(Permission) for a plain user, Ok for a moderator
#[tokio::test]
async fn pending_listing_needs_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::addon::create_addon(db, &["u1"]).await?;
    let service = AddonService::new(db);

    let result = service
        .get_by_status(ReviewStatus::Pending, Some(&author("u1")))
        .await;
    assert!(matches!(result, Err(AppError::Permission(_))));

    let pending = service
        .get_by_status(ReviewStatus::Pending, Some(&moderator()))
        .await?;
    assert_eq!(pending.len(), 1);

    Ok(())
}
