use super::*;

/// Tests creating a path below an existing use.
///
/// Expected: Ok with store-assigned id and every field preserved
#[tokio::test]
async fn creates_path_for_existing_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::texture_use::create_use(db, "3a", 3, &["java"]).await?;

    let repo = PathRepository::new(db);
    let created = repo
        .create(&input("3a", "assets/minecraft/textures/block/dirt.png"))
        .await?;

    assert_eq!(created.id, "1");
    assert_eq!(created.use_id, "3a");
    assert!(created.mcmeta);
    assert_eq!(repo.get_by_use("3a").await?, vec![created]);

    Ok(())
}

/// Tests creating a path below a missing use.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_dangling_use_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PathRepository::new(db)
        .create(&input("missing", "a/b.png"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
