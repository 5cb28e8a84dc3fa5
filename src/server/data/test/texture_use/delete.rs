use super::*;

/// Tests that deleting a use removes its paths.
///
/// Expected: Ok, use and path gone, texture kept
#[tokio::test]
async fn cascades_to_paths() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (texture, texture_use, path) = factory::helpers::create_texture_with_use_and_path(db).await?;

    UseRepository::new(db).delete(&texture_use.id).await?;

    let store = DocumentStore::new(db);
    assert!(store.collection("paths").get(&path.id).await?.is_none());
    assert!(store.collection("textures").get(&texture.id).await?.is_some());

    Ok(())
}

/// Tests deleting an absent use.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UseRepository::new(db).delete("nope").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
