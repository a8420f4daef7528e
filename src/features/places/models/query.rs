use crate::core::error::{AppError, Result};
use crate::shared::constants::ERR_INVALID_PARAMETER_TYPES;

/// A validated-shape nearby search: point, radius in meters and keyword
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub keyword: String,
}

impl PlaceQuery {
    /// Rejects queries whose numeric fields are not finite.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.latitude, self.longitude, self.radius_meters]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(AppError::Validation(
                ERR_INVALID_PARAMETER_TYPES.to_string(),
            ));
        }
        Ok(())
    }
}

/// A single call to the nearby search endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Initial(PlaceQuery),
    /// Continuation calls carry only the page token
    NextPage(String),
}
