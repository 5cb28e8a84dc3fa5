use sea_orm::{DatabaseConnection, DbErr};

use crate::fixture;

/// Inserts a path document below `use_id`, available in `1.20` only.
pub async fn create_path(
    db: &DatabaseConnection,
    id: &str,
    use_id: &str,
    path: &str,
) -> Result<entity::document::Model, DbErr> {
    let record = fixture::path::stored(id, use_id, path, &["1.20"], false);
    crate::factory::document::insert_document(db, "paths", record).await
}
