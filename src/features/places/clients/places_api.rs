use async_trait::async_trait;

use crate::features::places::models::{
    NearbySearchResponse, PlaceDetailsResponse, PlacesError, SearchRequest,
};

/// Raw access to the places provider.
///
/// Implementations return the provider envelope untouched; interpreting
/// `status` is left to the searcher and fetcher services. Errors are reserved
/// for transport and decoding failures.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn nearby_search(
        &self,
        request: &SearchRequest,
    ) -> Result<NearbySearchResponse, PlacesError>;

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, PlacesError>;
}
