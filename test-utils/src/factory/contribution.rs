use sea_orm::{DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Inserts a 32x contribution to `texture_id` by `contributors`.
pub async fn create_contribution(
    db: &DatabaseConnection,
    texture_id: i64,
    contributors: &[&str],
) -> Result<entity::document::Model, DbErr> {
    let id = next_id().to_string();
    let date = chrono::Utc::now().timestamp_millis();
    let record = fixture::contribution::stored(&id, texture_id, "c32", contributors, date);
    crate::factory::document::insert_document(db, "contributions", record).await
}
