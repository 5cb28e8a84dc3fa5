use super::*;

/// Tests merging submissions with their packs.
///
/// Expected: one entry per submission, carrying pack and submission fields
#[tokio::test]
async fn merges_pack_and_submission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pack::create_pack_with_submission(db, "faithful_32x").await?;
    factory::pack::create_pack_with_submission(db, "faithful_64x").await?;
    factory::pack::create_pack(db, "classic_faithful_32x").await?;

    let every_pack = SubmissionRepository::new(db).get_every_pack().await?;

    assert_eq!(every_pack.len(), 2);
    let entry = &every_pack["faithful_32x"];
    assert_eq!(entry.pack.name, "Pack faithful_32x");
    assert_eq!(entry.submission.id, "faithful_32x");
    assert_eq!(entry.submission.channels.submit, "faithful_32x-submit");

    Ok(())
}

/// Tests a submission whose pack does not exist.
///
/// Expected: that submission is left out, the rest are returned
#[tokio::test]
async fn drops_submission_without_pack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pack::create_pack_with_submission(db, "faithful_32x").await?;
    factory::pack::create_submission(db, "orphan").await?;

    let every_pack = SubmissionRepository::new(db).get_every_pack().await?;

    assert_eq!(every_pack.len(), 1);
    assert!(every_pack.contains_key("faithful_32x"));
    assert!(!every_pack.contains_key("orphan"));

    Ok(())
}

/// Tests a submission whose pack record is malformed.
///
/// Expected: that submission is left out instead of failing the call
#[tokio::test]
async fn drops_submission_with_unreadable_pack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_document_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::insert_document(db, "packs", serde_json::json!({ "id": "broken", "name": 5 }))
        .await?;
    factory::pack::create_submission(db, "broken").await?;
    factory::pack::create_pack_with_submission(db, "faithful_64x").await?;

    let every_pack = SubmissionRepository::new(db).get_every_pack().await?;

    assert_eq!(every_pack.keys().collect::<Vec<_>>(), vec!["faithful_64x"]);

    Ok(())
}
