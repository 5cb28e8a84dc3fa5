use super::*;

/// Tests staff deleting an add-on they did not write.
///
/// Expected: Ok and the add-on is gone
#[tokio::test]
async fn moderator_deletes_addon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::create_addon(db, &["u1"]).await?;
    let service = AddonService::new(db);

    service.delete(&moderator(), &stored.id).await?;

    assert!(matches!(
        service.get_by_id(&stored.id, Some(&moderator())).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests a non-author without staff roles deleting an add-on.
///
/// Expected: Err(Permission) and the add-on is kept
#[tokio::test]
async fn stranger_cannot_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::addon::create_addon(db, &["u1"]).await?;
    let service = AddonService::new(db);

    let result = service
        .delete(&Principal::new("u2", vec![Role::Translator]), &stored.id)
        .await;

    assert!(matches!(result, Err(AppError::Permission(_))));
    assert!(service.get_by_id(&stored.id, Some(&author("u1"))).await.is_ok());

    Ok(())
}
