use super::*;

/// Tests combining the name and tag filters.
///
/// Expected: only textures matching both, name compared case-insensitively
#[tokio::test]
async fn filters_by_name_and_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture::TextureFactory::new(db)
        .name("stone_bricks")
        .tags(&["block"])
        .build()
        .await?;
    factory::texture::TextureFactory::new(db)
        .name("stone_sword")
        .tags(&["item"])
        .build()
        .await?;
    factory::texture::TextureFactory::new(db)
        .name("dirt")
        .tags(&["block"])
        .build()
        .await?;

    let found = TextureRepository::new(db)
        .search(&TextureSearchParam {
            name: Some("STONE".to_string()),
            tag: Some("block".to_string()),
        })
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "stone_bricks");

    Ok(())
}

/// Tests searching without filters.
///
/// Expected: every texture
#[tokio::test]
async fn returns_everything_without_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture::create_texture(db).await?;
    factory::texture::create_texture(db).await?;

    let found = TextureRepository::new(db)
        .search(&TextureSearchParam::default())
        .await?;

    assert_eq!(found.len(), 2);

    Ok(())
}
