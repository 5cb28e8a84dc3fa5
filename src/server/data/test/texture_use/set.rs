use super::*;

/// Tests writing a use for an existing texture.
///
/// Expected: Ok with the use read back, stored with a single-element editions list
#[tokio::test]
async fn writes_use_for_existing_texture() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture::TextureFactory::new(db).id("12").build().await?;

    let written = UseRepository::new(db)
        .set(&TextureUse {
            id: "12a".to_string(),
            name: "stone".to_string(),
            texture: 12,
            edition: "java".to_string(),
        })
        .await?;

    assert_eq!(written.texture, 12);
    assert_eq!(written.edition, "java");

    let stored = DocumentStore::new(db)
        .collection("uses")
        .get("12a")
        .await?
        .unwrap();
    assert_eq!(stored["editions"], serde_json::json!(["java"]));
    assert_eq!(stored["textureUseName"], serde_json::json!("stone"));

    Ok(())
}

/// Tests writing a use whose texture does not exist.
///
/// Expected: Err(Validation) and nothing written
#[tokio::test]
async fn rejects_dangling_texture_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UseRepository::new(db);
    let result = repo
        .set(&TextureUse {
            id: "99a".to_string(),
            name: "ghost".to_string(),
            texture: 99,
            edition: "java".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(!repo.exists("99a").await?);

    Ok(())
}

/// Tests reading a stored use with an empty editions list.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn empty_editions_fail_to_map() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture_use::create_use(db, "5a", 5, &[]).await?;

    let result = UseRepository::new(db).get_by_id("5a").await;

    assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("5a")));

    Ok(())
}
