use std::sync::Arc;
use std::time::Duration;

use crate::core::error::Result;
use crate::features::places::clients::PlacesApi;
use crate::features::places::dtos::SearchPlacesResponseDto;
use crate::features::places::models::{NormalizedPlace, PlaceDetails, PlaceQuery};
use crate::features::places::services::{extract_address, DetailFetcher, PaginatedSearcher};
use crate::shared::constants::NOT_AVAILABLE;

/// Turns a query into the flattened list of normalized places.
///
/// One search (plus continuation pages), then one details call per result,
/// strictly in result order. The first failure aborts the whole request; no
/// partial list is ever returned.
pub struct EnrichmentPipeline {
    searcher: PaginatedSearcher,
    fetcher: DetailFetcher,
}

impl EnrichmentPipeline {
    pub fn new(api: Arc<dyn PlacesApi>, page_token_delay: Duration) -> Self {
        Self {
            searcher: PaginatedSearcher::new(Arc::clone(&api), page_token_delay),
            fetcher: DetailFetcher::new(api),
        }
    }

    #[tracing::instrument(skip_all, fields(keyword = %query.keyword, radius = query.radius_meters))]
    pub async fn handle(&self, query: PlaceQuery) -> Result<SearchPlacesResponseDto> {
        query.validate()?;

        let stubs = self.searcher.search(&query).await?;
        if stubs.is_empty() {
            tracing::info!("Search returned no results");
            return Ok(SearchPlacesResponseDto::no_results());
        }

        tracing::info!("Enriching {} search results", stubs.len());

        let mut results = Vec::with_capacity(stubs.len());
        for (index, stub) in stubs.iter().enumerate() {
            tracing::debug!(index, place_id = %stub.place_id, "Fetching place details");
            let details = self.fetcher.fetch_details(&stub.place_id).await?;
            results.push(normalize(details));
        }

        Ok(SearchPlacesResponseDto::success(results))
    }
}

fn normalize(details: PlaceDetails) -> NormalizedPlace {
    let address = extract_address(&details.address_components);
    NormalizedPlace {
        name: details.name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        address: details
            .formatted_address
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        city: address.city,
        state: address.state,
        country: address.country,
        pincode: address.pincode,
    }
}
