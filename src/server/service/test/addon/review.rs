use super::*;

/// Tests a moderator approving a pending add-on.
///
/// Expected: Ok with status approved and the moderator recorded as reviewer
#[tokio::test]
async fn moderator_approves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::create_addon(db, &["u1"]).await?;

    let addon = AddonService::new(db)
        .review(
            &moderator(),
            &stored.id,
            AddonReviewBody {
                status: ReviewStatus::Approved,
                reason: None,
            },
        )
        .await?;

    assert_eq!(addon.approval.status, ReviewStatus::Approved);
    assert_eq!(addon.approval.author.as_deref(), Some("mod"));
    assert_eq!(addon.approval.reason, None);

    Ok(())
}

/// Tests an author reviewing their own add-on.
///
/// Expected: Err(Permission)
#[tokio::test]
async fn author_cannot_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::create_addon(db, &["u1"]).await?;

    let result = AddonService::new(db)
        .review(&author("u1"), &stored.id, deny("nope"))
        .await;

    assert!(matches!(result, Err(AppError::Permission(_))));

    Ok(())
}

/// Tests denying without a usable reason.
///
/// Expected: Err(Validation) and the add-on stays pending
#[tokio::test]
async fn denial_needs_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::create_addon(db, &["u1"]).await?;
    let service = AddonService::new(db);

    let result = service.review(&moderator(), &stored.id, deny("   ")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(
        service.get_by_id(&stored.id, Some(&moderator())).await?.approval.status,
        ReviewStatus::Pending
    );

    Ok(())
}

/// Tests reviewing an add-on that was already denied.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn cannot_review_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::AddonFactory::new(db)
        .status("denied")
        .build()
        .await?;

    let result = AddonService::new(db)
        .review(
            &moderator(),
            &stored.id,
            AddonReviewBody {
                status: ReviewStatus::Approved,
                reason: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
