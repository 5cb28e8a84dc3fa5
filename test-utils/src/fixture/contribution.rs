use serde_json::{json, Value};

/// Contribution in the stored layout.
///
/// `date` is epoch milliseconds and the resolution is stored under `res`.
pub fn stored(id: &str, texture_id: i64, res: &str, contributors: &[&str], date: i64) -> Value {
    json!({
        "id": id,
        "date": date,
        "res": res,
        "textureID": texture_id,
        "contributors": contributors,
    })
}
