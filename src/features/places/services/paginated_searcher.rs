use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::features::places::clients::PlacesApi;
use crate::features::places::models::{
    PlaceQuery, PlacesError, ProviderOperation, ResultStub, SearchRequest, STATUS_OK,
    STATUS_ZERO_RESULTS,
};

/// Hard stop for providers that keep issuing continuation tokens.
/// Nearby search serves at most 3 pages, so a healthy provider never hits it.
const MAX_PAGES: usize = 10;

/// Drives the nearby search protocol across all continuation pages
pub struct PaginatedSearcher {
    api: Arc<dyn PlacesApi>,
    page_token_delay: Duration,
}

impl PaginatedSearcher {
    pub fn new(api: Arc<dyn PlacesApi>, page_token_delay: Duration) -> Self {
        Self {
            api,
            page_token_delay,
        }
    }

    /// Collect every result stub for `query`, in provider page order.
    ///
    /// Repeated place ids are dropped (first occurrence kept). Any status other
    /// than OK / ZERO_RESULTS, or a token still pending after `MAX_PAGES`, fails
    /// the whole search and discards earlier pages.
    pub async fn search(&self, query: &PlaceQuery) -> Result<Vec<ResultStub>, PlacesError> {
        let mut request = SearchRequest::Initial(query.clone());
        let mut seen = HashSet::new();
        let mut stubs = Vec::new();
        let mut page = 1;

        loop {
            let response = self.api.nearby_search(&request).await?;

            if response.status != STATUS_OK && response.status != STATUS_ZERO_RESULTS {
                return Err(PlacesError::provider(
                    ProviderOperation::Search,
                    response.status,
                    response.error_message,
                ));
            }

            tracing::debug!(
                page,
                results = response.results.len(),
                has_next = response.next_page_token.is_some(),
                "Fetched search page"
            );

            for stub in response.results {
                if seen.insert(stub.place_id.clone()) {
                    stubs.push(stub);
                }
            }

            let Some(token) = response.next_page_token.filter(|t| !t.is_empty()) else {
                break;
            };

            if page >= MAX_PAGES {
                tracing::error!(
                    "Search pagination aborted after {} pages with a token still pending",
                    MAX_PAGES
                );
                return Err(PlacesError::PageLimit(MAX_PAGES));
            }

            // A fresh token is rejected until the provider has propagated it
            tokio::time::sleep(self.page_token_delay).await;
            request = SearchRequest::NextPage(token);
            page += 1;
        }

        Ok(stubs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_query, StubPlacesApi};
    use tokio_test::{assert_err, assert_ok};

    const DELAY: Duration = Duration::from_millis(60);

    #[tokio::test]
    async fn test_two_pages_in_order_with_delay() {
        let stub = Arc::new(
            StubPlacesApi::new()
                .with_page(&["p1"], Some("token-1"))
                .with_page(&["p2"], None),
        );
        let searcher = PaginatedSearcher::new(stub.clone(), DELAY);

        let stubs = assert_ok!(searcher.search(&sample_query()).await);
        let ids: Vec<_> = stubs.iter().map(|s| s.place_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);

        let calls = stub.search_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, SearchRequest::Initial(sample_query()));
        assert_eq!(calls[1].0, SearchRequest::NextPage("token-1".to_string()));
        assert!(calls[1].1.duration_since(calls[0].1) >= DELAY);
    }

    #[tokio::test]
    async fn test_zero_results_is_empty_success() {
        let stub = Arc::new(StubPlacesApi::new().with_search_status("ZERO_RESULTS", None));
        let searcher = PaginatedSearcher::new(stub.clone(), DELAY);

        let stubs = assert_ok!(searcher.search(&sample_query()).await);
        assert!(stubs.is_empty());
        assert_eq!(stub.search_call_count(), 1);
    }

    #[tokio::test]
    async fn test_error_status_on_later_page_discards_results() {
        let stub = Arc::new(
            StubPlacesApi::new()
                .with_page(&["p1"], Some("token-1"))
                .with_search_status("INVALID_REQUEST", None),
        );
        let searcher = PaginatedSearcher::new(stub.clone(), Duration::from_millis(1));

        let err = assert_err!(searcher.search(&sample_query()).await);
        assert_eq!(
            err.to_string(),
            "Error fetching places: INVALID_REQUEST - No error message provided"
        );
        assert_eq!(stub.search_call_count(), 2);
    }

    #[tokio::test]
    async fn test_denied_first_page_fails_immediately() {
        let stub = Arc::new(
            StubPlacesApi::new().with_search_status("REQUEST_DENIED", Some("invalid key")),
        );
        let searcher = PaginatedSearcher::new(stub.clone(), DELAY);

        let err = assert_err!(searcher.search(&sample_query()).await);
        assert!(matches!(
            err,
            PlacesError::Provider { ref status, .. } if status == "REQUEST_DENIED"
        ));
        assert_eq!(stub.search_call_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_place_ids_are_dropped() {
        let stub = Arc::new(
            StubPlacesApi::new()
                .with_page(&["p1", "p2"], Some("token-1"))
                .with_page(&["p2", "p3"], None),
        );
        let searcher = PaginatedSearcher::new(stub, Duration::from_millis(1));

        let stubs = assert_ok!(searcher.search(&sample_query()).await);
        let ids: Vec<_> = stubs.iter().map(|s| s.place_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_runaway_pagination_fails_without_partial_results() {
        let mut stub = StubPlacesApi::new();
        for i in 0..MAX_PAGES + 2 {
            let place_id = format!("p{}", i);
            let token = format!("token-{}", i);
            stub = stub.with_page(&[place_id.as_str()], Some(token.as_str()));
        }
        let stub = Arc::new(stub);
        let searcher = PaginatedSearcher::new(stub.clone(), Duration::ZERO);

        let err = assert_err!(searcher.search(&sample_query()).await);
        assert!(matches!(err, PlacesError::PageLimit(MAX_PAGES)));
        assert_eq!(stub.search_call_count(), MAX_PAGES);
    }
}
