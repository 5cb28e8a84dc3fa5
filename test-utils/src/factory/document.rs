use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Inserts a JSON object into a collection.
///
/// The `id` field of `record` becomes the document key and is removed from the
/// stored body, matching how the application's store writes records.
///
/// # Arguments
/// - `db` - Database connection
/// - `collection` - Collection name (`"textures"`, `"users"`, ...)
/// - `record` - JSON object carrying a string `id` field
///
/// # Returns
/// - `Ok(entity::document::Model)` - The inserted row
/// - `Err(DbErr)` - Record was not an object with a string id, or the insert failed
pub async fn insert_document(
    db: &DatabaseConnection,
    collection: &str,
    record: Value,
) -> Result<entity::document::Model, DbErr> {
    let Value::Object(mut body) = record else {
        return Err(DbErr::Custom("factory record must be a JSON object".to_string()));
    };

    let id = match body.remove("id") {
        Some(Value::String(id)) => id,
        _ => return Err(DbErr::Custom("factory record needs a string id".to_string())),
    };

    entity::document::ActiveModel {
        collection: ActiveValue::Set(collection.to_string()),
        id: ActiveValue::Set(id),
        body: ActiveValue::Set(Value::Object(body).to_string()),
    }
    .insert(db)
    .await
}
