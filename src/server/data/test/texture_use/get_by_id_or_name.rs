use super::*;

/// Tests lookup by id.
///
/// Expected: exactly the use with that id
#[tokio::test]
async fn finds_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture_use::create_named_use(db, "7a", 7, "grass_top", &["java"]).await?;

    let found = UseRepository::new(db).get_by_id_or_name("7a").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "grass_top");

    Ok(())
}

/// Tests the name fallback.
///
/// Expected: every use carrying that exact name
#[tokio::test]
async fn falls_back_to_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture_use::create_named_use(db, "7a", 7, "grass_top", &["java"]).await?;
    factory::texture_use::create_named_use(db, "7b", 7, "grass_top", &["bedrock"]).await?;
    factory::texture_use::create_named_use(db, "8a", 8, "dirt", &["java"]).await?;

    let found = UseRepository::new(db).get_by_id_or_name("grass_top").await?;

    let ids: Vec<_> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["7a", "7b"]);

    Ok(())
}

/// Tests filtering by texture ids and edition.
///
/// Expected: only uses of the listed textures in that edition
#[tokio::test]
async fn filters_by_textures_and_edition() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture_use::create_use(db, "1a", 1, &["java"]).await?;
    factory::texture_use::create_use(db, "1b", 1, &["bedrock"]).await?;
    factory::texture_use::create_use(db, "2a", 2, &["java"]).await?;
    factory::texture_use::create_use(db, "3a", 3, &["java"]).await?;

    let found = UseRepository::new(db)
        .get_by_textures_and_edition(&[1, 2], "java")
        .await?;

    let ids: Vec<_> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["1a", "2a"]);

    Ok(())
}
