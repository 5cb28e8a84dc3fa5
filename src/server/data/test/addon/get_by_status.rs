use super::*;

/// Tests filtering add-ons by review status.
///
/// Expected: only add-ons in the requested state
#[tokio::test]
async fn filters_by_review_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::addon::AddonFactory::new(db).status("pending").build().await?;
    factory::addon::AddonFactory::new(db).status("approved").build().await?;
    let denied = factory::addon::AddonFactory::new(db)
        .status("denied")
        .build()
        .await?;

    let found = AddonRepository::new(db)
        .get_by_status(ReviewStatus::Denied)
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, denied.id);
    assert_eq!(found[0].approval.reason.as_deref(), Some("placeholder reason"));

    Ok(())
}
