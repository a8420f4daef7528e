use std::sync::Arc;

use crate::features::places::clients::PlacesApi;
use crate::features::places::models::{PlaceDetails, PlacesError, ProviderOperation, STATUS_OK};

/// Fields requested from the details endpoint
pub const DETAIL_FIELDS: [&str; 3] = ["name", "formatted_address", "address_component"];

/// Looks up one place record. Single attempt, no retry.
pub struct DetailFetcher {
    api: Arc<dyn PlacesApi>,
}

impl DetailFetcher {
    pub fn new(api: Arc<dyn PlacesApi>) -> Self {
        Self { api }
    }

    pub async fn fetch_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let response = self.api.place_details(place_id, &DETAIL_FIELDS).await?;

        if response.status != STATUS_OK {
            return Err(PlacesError::provider(
                ProviderOperation::Details,
                response.status,
                response.error_message,
            ));
        }

        Ok(response.result.unwrap_or_default())
    }
}
