use serde_json::{json, Value};

/// Add-on in the stored layout with the given review status.
///
/// A `denied` status gets a placeholder reason so the stored record stays consistent
/// with what the review flow writes.
pub fn stored(id: &str, name: &str, authors: &[&str], status: &str) -> Value {
    let reason = if status == "denied" {
        json!("placeholder reason")
    } else {
        Value::Null
    };

    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "authors": authors,
        "options": { "tags": ["Java"], "comments": true, "optifine": false },
        "downloads": [{ "key": "CurseForge", "links": ["https://example.com/download"] }],
        "approval": { "status": status, "author": null, "reason": reason },
        "last_updated": 1_700_000_000_000_i64,
    })
}
