use super::*;

/// Tests creating an add-on.
///
/// Expected: Ok with pending approval and no reviewer
#[tokio::test]
async fn creates_pending_addon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let addon = AddonRepository::new(db)
        .create(AddonCreationParam {
            name: "Connected Glass".to_string(),
            description: "Seamless glass".to_string(),
            authors: vec!["u1".to_string()],
            options: AddonOptions::default(),
            downloads: vec![],
        })
        .await?;

    assert_eq!(addon.id, "1");
    assert_eq!(addon.approval.status, ReviewStatus::Pending);
    assert_eq!(addon.approval.author, None);

    Ok(())
}

/// Tests the case-insensitive name lookup.
///
/// Expected: Some for any casing of an existing name
#[tokio::test]
async fn finds_by_name_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::addon::AddonFactory::new(db)
        .name("Connected Glass")
        .build()
        .await?;
    let repo = AddonRepository::new(db);

    assert!(repo.find_by_name("connected glass").await?.is_some());
    assert!(repo.find_by_name("Other").await?.is_none());

    Ok(())
}
