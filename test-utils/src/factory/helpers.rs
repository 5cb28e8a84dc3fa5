//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique ids in tests.
///
/// Starts high so factory ids never collide with the small ids that the store
/// allocates for records created through the application (`"1"`, `"2"`, ...).
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1000);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a texture with one use and one path below it.
///
/// Ids follow the stored convention: the use id is the texture id plus `a`, the path
/// id is the texture id plus `p`.
///
/// # Returns
/// - `Ok((texture, texture_use, path))` - The three created documents
/// - `Err(DbErr)` - Database error during creation
pub async fn create_texture_with_use_and_path(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::document::Model,
        entity::document::Model,
        entity::document::Model,
    ),
    DbErr,
> {
    let texture = crate::factory::texture::create_texture(db).await?;
    let texture_id: i64 = texture
        .id
        .parse()
        .map_err(|_| DbErr::Custom(format!("factory texture id {} is not numeric", texture.id)))?;

    let use_id = format!("{}a", texture.id);
    let texture_use =
        crate::factory::texture_use::create_use(db, &use_id, texture_id, &["java"]).await?;

    let path_id = format!("{}p", texture.id);
    let path = crate::factory::path::create_path(
        db,
        &path_id,
        &use_id,
        "assets/minecraft/textures/block/stone.png",
    )
    .await?;

    Ok((texture, texture_use, path))
}
