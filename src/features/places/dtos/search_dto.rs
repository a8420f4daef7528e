use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::features::places::models::{NormalizedPlace, PlaceQuery};
use crate::shared::constants::{
    ERR_INVALID_PARAMETER_TYPES, ERR_MISSING_PARAMETERS, MSG_NO_RESULTS, MSG_SUCCESS,
};

/// Request body for a nearby keyword search.
///
/// Fields are kept loosely typed so that missing and mistyped parameters can be
/// reported separately. Numeric fields accept numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchPlacesRequestDto {
    /// Latitude of the search center
    #[schema(value_type = Option<f64>, example = 12.9)]
    pub lat: Option<Value>,
    /// Longitude of the search center
    #[schema(value_type = Option<f64>, example = 77.6)]
    pub lng: Option<Value>,
    /// Search radius in meters
    #[schema(value_type = Option<f64>, example = 1000)]
    pub radius: Option<Value>,
    #[schema(value_type = Option<String>, example = "cafe")]
    pub keyword: Option<Value>,
}

/// Successful search result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchPlacesResponseDto {
    pub message: String,
    pub results: Vec<NormalizedPlace>,
}

impl SearchPlacesResponseDto {
    pub fn success(results: Vec<NormalizedPlace>) -> Self {
        Self {
            message: MSG_SUCCESS.to_string(),
            results,
        }
    }

    pub fn no_results() -> Self {
        Self {
            message: MSG_NO_RESULTS.to_string(),
            results: Vec::new(),
        }
    }
}

fn is_missing(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn as_keyword(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl TryFrom<SearchPlacesRequestDto> for PlaceQuery {
    type Error = AppError;

    fn try_from(dto: SearchPlacesRequestDto) -> Result<Self, Self::Error> {
        if [&dto.lat, &dto.lng, &dto.radius, &dto.keyword]
            .into_iter()
            .any(is_missing)
        {
            return Err(AppError::Validation(ERR_MISSING_PARAMETERS.to_string()));
        }

        let invalid = || AppError::Validation(ERR_INVALID_PARAMETER_TYPES.to_string());
        let number = |value: &Option<Value>| value.as_ref().and_then(as_number).ok_or_else(invalid);

        let query = PlaceQuery {
            latitude: number(&dto.lat)?,
            longitude: number(&dto.lng)?,
            radius_meters: number(&dto.radius)?,
            keyword: dto
                .keyword
                .as_ref()
                .and_then(as_keyword)
                .ok_or_else(invalid)?,
        };
        query.validate()?;

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: Value) -> SearchPlacesRequestDto {
        serde_json::from_value(value).unwrap()
    }

    fn error_message(result: Result<PlaceQuery, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_body_converts() {
        let query = PlaceQuery::try_from(dto(
            json!({ "lat": 12.9, "lng": 77.6, "radius": 1000, "keyword": "cafe" }),
        ))
        .unwrap();
        assert_eq!(
            query,
            PlaceQuery {
                latitude: 12.9,
                longitude: 77.6,
                radius_meters: 1000.0,
                keyword: "cafe".to_string(),
            }
        );
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let query = PlaceQuery::try_from(dto(
            json!({ "lat": "12.9", "lng": " 77.6 ", "radius": "1500", "keyword": "cafe" }),
        ))
        .unwrap();
        assert_eq!(query.longitude, 77.6);
        assert_eq!(query.radius_meters, 1500.0);
    }

    #[test]
    fn test_zero_coordinates_are_present() {
        let query = PlaceQuery::try_from(dto(
            json!({ "lat": 0, "lng": 0, "radius": 500, "keyword": "atm" }),
        ))
        .unwrap();
        assert_eq!(query.latitude, 0.0);
    }

    #[test]
    fn test_missing_fields() {
        for body in [
            json!({ "lng": 77.6, "radius": 1000, "keyword": "cafe" }),
            json!({ "lat": 12.9, "radius": 1000, "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "radius": 1000 }),
            json!({ "lat": null, "lng": 77.6, "radius": 1000, "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "radius": 1000, "keyword": "" }),
            json!({}),
        ] {
            assert_eq!(
                error_message(PlaceQuery::try_from(dto(body))),
                ERR_MISSING_PARAMETERS
            );
        }
    }

    #[test]
    fn test_missing_takes_precedence_over_invalid() {
        let result = PlaceQuery::try_from(dto(json!({ "lat": "north", "keyword": "cafe" })));
        assert_eq!(error_message(result), ERR_MISSING_PARAMETERS);
    }

    #[test]
    fn test_invalid_types() {
        for body in [
            json!({ "lat": "north", "lng": 77.6, "radius": 1000, "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": "east", "radius": 1000, "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "radius": "far", "keyword": "cafe" }),
            json!({ "lat": true, "lng": 77.6, "radius": 1000, "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "radius": [1000], "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "radius": "inf", "keyword": "cafe" }),
            json!({ "lat": 12.9, "lng": 77.6, "radius": 1000, "keyword": ["cafe"] }),
        ] {
            assert_eq!(
                error_message(PlaceQuery::try_from(dto(body))),
                ERR_INVALID_PARAMETER_TYPES
            );
        }
    }

    #[test]
    fn test_numeric_keyword_is_coerced() {
        let query = PlaceQuery::try_from(dto(
            json!({ "lat": 12.9, "lng": 77.6, "radius": 1000, "keyword": 24 }),
        ))
        .unwrap();
        assert_eq!(query.keyword, "24");
    }

    #[test]
    fn test_response_serialization() {
        let body = serde_json::to_value(SearchPlacesResponseDto::no_results()).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "No results found for the given keyword and location.",
                "results": []
            })
        );
    }
}
