use serde_json::{json, Value};

/// Path in the stored layout (`useID` and `path` instead of `use` and `name`).
pub fn stored(id: &str, use_id: &str, path: &str, versions: &[&str], mcmeta: bool) -> Value {
    json!({
        "id": id,
        "useID": use_id,
        "path": path,
        "versions": versions,
        "mcmeta": mcmeta,
    })
}
