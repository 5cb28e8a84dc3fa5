use super::*;

/// Tests creating the first texture in an empty store.
///
/// Verifies that the store assigns id "1", that the record is written in the legacy
/// layout and that `get_raw` reads it back in the domain layout.
///
/// Expected: Ok with id "1" and raw map {"1": Stone}
#[tokio::test]
async fn creates_texture_with_first_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TextureRepository::new(db);
    let created = repo
        .create(&TextureCreationParam {
            name: "Stone".to_string(),
            tags: vec!["block".to_string()],
        })
        .await?;

    let stone = Texture {
        id: "1".to_string(),
        name: "Stone".to_string(),
        tags: vec!["block".to_string()],
    };
    assert_eq!(created, stone);

    let raw = repo.get_raw().await?;
    assert_eq!(raw.len(), 1);
    assert_eq!(raw.get("1"), Some(&stone));

    // Stored in the legacy layout
    let stored = DocumentStore::new(db)
        .collection("textures")
        .get("1")
        .await?
        .unwrap();
    assert!(stored.contains_key("type"));
    assert!(!stored.contains_key("tags"));

    Ok(())
}

/// Tests that ids keep increasing past factory-created records.
///
/// Expected: Ok with id one past the largest existing id
#[tokio::test]
async fn allocates_next_numeric_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture::TextureFactory::new(db).id("41").build().await?;

    let created = TextureRepository::new(db)
        .create(&TextureCreationParam {
            name: "Dirt".to_string(),
            tags: vec![],
        })
        .await?;

    assert_eq!(created.id, "42");

    Ok(())
}
