use sea_orm::{DatabaseConnection, DbErr};

use crate::fixture;

/// Inserts an unnamed use document for `texture_id`.
pub async fn create_use(
    db: &DatabaseConnection,
    id: &str,
    texture_id: i64,
    editions: &[&str],
) -> Result<entity::document::Model, DbErr> {
    create_named_use(db, id, texture_id, "", editions).await
}

/// Inserts a use document with a `textureUseName`.
pub async fn create_named_use(
    db: &DatabaseConnection,
    id: &str,
    texture_id: i64,
    name: &str,
    editions: &[&str],
) -> Result<entity::document::Model, DbErr> {
    let record = fixture::texture_use::stored(id, texture_id, name, editions);
    crate::factory::document::insert_document(db, "uses", record).await
}
