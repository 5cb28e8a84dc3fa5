use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{controller, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pack API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Textures, add-ons, users and submissions of the resource pack."
    ),
    components(schemas(ErrorDto)),
    tags(
        (name = "Textures", description = "Textures and their tags"),
        (name = "Uses", description = "Where a texture is used, per edition"),
        (name = "Paths", description = "File paths of a use"),
        (name = "Contributions", description = "Who drew which texture"),
        (name = "Mods", description = "Modded textures and the mod catalog"),
        (name = "Packs", description = "Pack records"),
        (name = "Submissions", description = "Per-pack submission settings"),
        (name = "Addons", description = "Community add-ons and their review"),
        (name = "Users", description = "Accounts and roles"),
        (name = "Auth", description = "Email verification and logout"),
        (name = "Cloudflare", description = "CDN administration")
    )
)]
struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/docs` and the document at
/// `/swagger.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(controller::texture::routes())
        .merge(controller::texture_use::routes())
        .merge(controller::path::routes())
        .merge(controller::contribution::routes())
        .merge(controller::mods::routes())
        .merge(controller::pack::routes())
        .merge(controller::addon::routes())
        .merge(controller::user::routes())
        .merge(controller::auth::routes())
        .merge(controller::cloudflare::routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/docs").url("/swagger.json", api))
        .layer(cors)
}
