use sea_orm::{DatabaseConnection, DbErr};

use crate::fixture;

/// Inserts a canonical pack record.
pub async fn create_pack(
    db: &DatabaseConnection,
    id: &str,
) -> Result<entity::document::Model, DbErr> {
    let record = fixture::pack::pack(id, &format!("Pack {id}"), 32);
    crate::factory::document::insert_document(db, "packs", record).await
}

/// Inserts submission settings keyed by `id`, without touching `packs`.
pub async fn create_submission(
    db: &DatabaseConnection,
    id: &str,
) -> Result<entity::document::Model, DbErr> {
    crate::factory::document::insert_document(db, "submissions", fixture::pack::submission(id))
        .await
}

/// Inserts a pack and its submission settings under the same id.
pub async fn create_pack_with_submission(
    db: &DatabaseConnection,
    id: &str,
) -> Result<(entity::document::Model, entity::document::Model), DbErr> {
    let pack = create_pack(db, id).await?;
    let submission = create_submission(db, id).await?;
    Ok((pack, submission))
}
