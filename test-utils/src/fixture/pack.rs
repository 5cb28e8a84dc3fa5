use serde_json::{json, Value};

/// Canonical pack record.
pub fn pack(id: &str, name: &str, resolution: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "tags": ["vanilla"],
        "resolution": resolution,
    })
}

/// Submission settings for a pack, keyed by the same id as the pack.
pub fn submission(id: &str) -> Value {
    json!({
        "id": id,
        "reference": null,
        "channels": {
            "submit": format!("{id}-submit"),
            "results": format!("{id}-results"),
        },
        "time_to_results": 3,
        "contributor_role": null,
    })
}
