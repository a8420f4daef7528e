use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::JsonOrForm;
use crate::features::places::dtos::{SearchPlacesRequestDto, SearchPlacesResponseDto};
use crate::features::places::models::PlaceQuery;
use crate::features::places::services::EnrichmentPipeline;
use crate::shared::types::ErrorResponse;

/// Search places by keyword around a point
#[utoipa::path(
    post,
    path = "/api/places/search",
    request_body(
        content = SearchPlacesRequestDto,
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Normalized places, or an empty list when nothing matched", body = SearchPlacesResponseDto),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Places provider failure", body = ErrorResponse)
    ),
    tag = "places"
)]
pub async fn search_places(
    State(pipeline): State<Arc<EnrichmentPipeline>>,
    JsonOrForm(dto): JsonOrForm<SearchPlacesRequestDto>,
) -> Result<Json<SearchPlacesResponseDto>> {
    let query = PlaceQuery::try_from(dto)?;
    let response = pipeline.handle(query).await?;
    Ok(Json(response))
}
