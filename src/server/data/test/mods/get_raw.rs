use serde_json::json;

use super::*;

/// Tests reading mods stored with empty url strings.
///
/// Expected: urls mapped to None, name available by id
#[tokio::test]
async fn maps_stored_mods() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::insert_document(
        db,
        "mods",
        json!({
            "id": "55",
            "name": "Industrial Craft 2",
            "aliases": ["IC2"],
            "curse_url": "",
            "resource_pack": { "blacklist": [], "versions": ["1.12.2"], "git_repository": "" },
            "blacklisted": false,
        }),
    )
    .await?;

    let repo = ModsRepository::new(db);
    let mods = repo.get_raw().await?;

    assert_eq!(mods["55"].curse_url, None);
    assert_eq!(repo.get_name("55").await?, "Industrial Craft 2");
    assert!(matches!(repo.get_name("56").await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests passing pack versions through.
///
/// Expected: stored documents keyed by id
#[tokio::test]
async fn reads_pack_versions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::insert_document(db, "pack_versions", json!({ "id": "1.12", "min": "1.12", "max": "1.12.2" }))
        .await?;

    let versions = ModsRepository::new(db).get_pack_versions().await?;

    assert_eq!(versions["1.12"]["max"], json!("1.12.2"));

    Ok(())
}
