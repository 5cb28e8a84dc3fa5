use super::*;

/// Tests deleting the same texture twice.
///
/// Expected: first delete Ok, second Err(NotFound)
#[tokio::test]
async fn second_delete_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let texture = factory::texture::create_texture(db).await?;
    let repo = TextureRepository::new(db);

    repo.delete(&texture.id).await?;
    let second = repo.delete(&texture.id).await;

    assert!(matches!(second, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting a texture removes its uses and their paths.
///
/// Records belonging to other textures must survive.
///
/// Expected: Ok with only the other texture's use and path left
#[tokio::test]
async fn cascades_to_uses_and_paths() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (texture, texture_use, path) = factory::helpers::create_texture_with_use_and_path(db).await?;
    let (_, other_use, other_path) = factory::helpers::create_texture_with_use_and_path(db).await?;

    TextureRepository::new(db).delete(&texture.id).await?;

    let store = DocumentStore::new(db);
    let uses = store.collection("uses").read_raw().await?;
    let paths = store.collection("paths").read_raw().await?;

    assert!(!uses.contains_key(&texture_use.id));
    assert!(!paths.contains_key(&path.id));
    assert!(uses.contains_key(&other_use.id));
    assert!(paths.contains_key(&other_path.id));

    Ok(())
}
