use super::*;

/// Tests replacing an existing path.
///
/// Expected: Ok with the new values read back
#[tokio::test]
async fn replaces_existing_path() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, texture_use, path) = factory::helpers::create_texture_with_use_and_path(db).await?;

    let updated = PathRepository::new(db)
        .update(&path.id, &input(&texture_use.id, "renamed.png"))
        .await?;

    assert_eq!(updated.id, path.id);
    assert_eq!(updated.name, "renamed.png");
    assert_eq!(updated.versions.len(), 2);

    Ok(())
}

/// Tests updating an absent path.
///
/// Expected: Err(NotFound) even when the use exists
#[tokio::test]
async fn fails_for_missing_path() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture_use::create_use(db, "3a", 3, &["java"]).await?;

    let result = PathRepository::new(db).update("77", &input("3a", "x.png")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
