use axum::Router;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::features::places::{
    dtos as places_dtos, handlers as places_handlers, models as places_models,
};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Places
        places_handlers::search_handler::search_places,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Places
            places_dtos::SearchPlacesRequestDto,
            places_dtos::SearchPlacesResponseDto,
            places_models::NormalizedPlace,
        )
    ),
    tags(
        (name = "places", description = "Nearby place search with address normalization"),
    ),
    info(
        title = "Nearby Places API",
        version = "0.1.0",
        description = "Keyword search for places around a point",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Public Swagger UI and JSON document, no credentials required
pub fn docs_router(openapi: utoipa::openapi::OpenApi) -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
}
