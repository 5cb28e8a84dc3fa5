use serde_json::{json, Value};

/// Texture use in the stored layout.
///
/// # Arguments
/// - `id` - Use id, conventionally the texture id plus a letter (`"12a"`)
/// - `texture_id` - Numeric id of the texture this use belongs to
/// - `editions` - Stored editions list; only the first survives mapping
pub fn stored(id: &str, texture_id: i64, name: &str, editions: &[&str]) -> Value {
    json!({
        "id": id,
        "textureID": texture_id,
        "textureUseName": name,
        "editions": editions,
    })
}
