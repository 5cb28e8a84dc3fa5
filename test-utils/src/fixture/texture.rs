use serde_json::{json, Value};

/// Texture in the legacy layout, tags stored under `type`.
pub fn legacy(id: &str, name: &str, tags: &[&str]) -> Value {
    json!({ "id": id, "name": name, "type": tags })
}

/// Texture already migrated to the current layout, tags stored under `tags`.
pub fn migrated(id: &str, name: &str, tags: &[&str]) -> Value {
    json!({ "id": id, "name": name, "tags": tags })
}
