use std::collections::{BTreeMap, HashMap};

use sea_orm::{
    sea_query::OnConflict,
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde_json::Value;

use super::{Document, ID_FIELD};

/// Handle to one named collection.
///
/// Reads inject the record key as the `id` field; writes strip it again so the body
/// never disagrees with the key.
pub struct Collection<'a> {
    db: &'a DatabaseConnection,
    name: &'static str,
}

impl<'a> Collection<'a> {
    pub(super) fn new(db: &'a DatabaseConnection, name: &'static str) -> Self {
        Self { db, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the entire collection as a mapping from id to record.
    ///
    /// No pagination: collections hold bounded catalog data.
    ///
    /// # Returns
    /// - `Ok(BTreeMap<String, Document>)` - Every record, keyed and ordered by id
    /// - `Err(DbErr)` - Query failed or a stored body is not a JSON object
    pub async fn read_raw(&self) -> Result<BTreeMap<String, Document>, DbErr> {
        let rows = entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(self.name))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|row| {
                let id = row.id.clone();
                Ok((id, decode(row)?))
            })
            .collect()
    }

    /// Reads one record by id.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Record found, `id` field injected
    /// - `Ok(None)` - No record with that id in this collection
    /// - `Err(DbErr)` - Query failed or the stored body is not a JSON object
    pub async fn get(&self, id: &str) -> Result<Option<Document>, DbErr> {
        let row = entity::prelude::Document::find_by_id((self.name.to_string(), id.to_string()))
            .one(self.db)
            .await?;

        row.map(decode).transpose()
    }

    /// Reads several records by id in one query.
    ///
    /// The result follows the order of `ids`; ids without a record are skipped and
    /// duplicate ids yield the record once per occurrence.
    pub async fn search_keys(&self, ids: &[String]) -> Result<Vec<Document>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(self.name))
            .filter(entity::document::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await?;

        let mut by_id: HashMap<String, Document> = HashMap::with_capacity(rows.len());
        for row in rows {
            let id = row.id.clone();
            by_id.insert(id, decode(row)?);
        }

        Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
    }

    /// Inserts or replaces the record stored under `id`.
    ///
    /// Any `id` field inside `record` is ignored in favour of the key.
    pub async fn set(&self, id: &str, record: Document) -> Result<(), DbErr> {
        entity::prelude::Document::insert(entity::document::ActiveModel {
            collection: ActiveValue::Set(self.name.to_string()),
            id: ActiveValue::Set(id.to_string()),
            body: ActiveValue::Set(encode(record)),
        })
        .on_conflict(
            OnConflict::columns([
                entity::document::Column::Collection,
                entity::document::Column::Id,
            ])
            .update_column(entity::document::Column::Body)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Inserts a record under a freshly allocated id.
    ///
    /// Ids are allocated as one past the largest numeric id in the collection, so the
    /// first record of an empty collection gets `"1"`. Allocation and insert are two
    /// statements; a concurrent `add` racing for the same id fails with a unique
    /// constraint violation instead of overwriting.
    ///
    /// # Returns
    /// - `Ok(String)` - The allocated id
    /// - `Err(DbErr)` - Query or insert failed
    pub async fn add(&self, record: Document) -> Result<String, DbErr> {
        let id = self.next_id().await?;

        entity::prelude::Document::insert(entity::document::ActiveModel {
            collection: ActiveValue::Set(self.name.to_string()),
            id: ActiveValue::Set(id.clone()),
            body: ActiveValue::Set(encode(record)),
        })
        .exec(self.db)
        .await?;

        Ok(id)
    }

    /// Removes the record stored under `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - A record existed and was removed
    /// - `Ok(false)` - No record with that id
    /// - `Err(DbErr)` - Delete failed
    pub async fn remove(&self, id: &str) -> Result<bool, DbErr> {
        let result =
            entity::prelude::Document::delete_by_id((self.name.to_string(), id.to_string()))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    async fn next_id(&self) -> Result<String, DbErr> {
        let ids: Vec<String> = entity::prelude::Document::find()
            .select_only()
            .column(entity::document::Column::Id)
            .filter(entity::document::Column::Collection.eq(self.name))
            .into_tuple()
            .all(self.db)
            .await?;

        let max = ids
            .iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Ok((max + 1).to_string())
    }
}

fn decode(row: entity::document::Model) -> Result<Document, DbErr> {
    let mut record = match serde_json::from_str::<Value>(&row.body) {
        Ok(Value::Object(record)) => record,
        Ok(_) => {
            return Err(DbErr::Json(format!(
                "document {}/{} is not a JSON object",
                row.collection, row.id
            )))
        }
        Err(e) => return Err(DbErr::Json(e.to_string())),
    };

    record.insert(ID_FIELD.to_string(), Value::String(row.id));
    Ok(record)
}

fn encode(mut record: Document) -> String {
    record.remove(ID_FIELD);
    Value::Object(record).to_string()
}
