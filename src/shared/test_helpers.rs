use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Instant;

use async_trait::async_trait;

use crate::features::places::clients::PlacesApi;
use crate::features::places::models::{
    AddressComponent, NearbySearchResponse, PlaceDetails, PlaceDetailsResponse, PlaceQuery,
    PlacesError, ResultStub, SearchRequest,
};

pub fn sample_query() -> PlaceQuery {
    PlaceQuery {
        latitude: 12.9,
        longitude: 77.6,
        radius_meters: 1000.0,
        keyword: "cafe".to_string(),
    }
}

pub fn component(long_name: &str, types: &[&str]) -> AddressComponent {
    AddressComponent {
        long_name: long_name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

/// Scripted places provider that records every call.
///
/// Search pages are served in the order they were added; an exhausted script
/// answers with a transport error. Details for unknown place ids answer
/// NOT_FOUND.
#[derive(Default)]
pub struct StubPlacesApi {
    pages: Mutex<VecDeque<NearbySearchResponse>>,
    details: HashMap<String, PlaceDetailsResponse>,
    transport_failures: HashSet<String>,
    search_calls: Mutex<Vec<(SearchRequest, Instant)>>,
    detail_calls: Mutex<Vec<String>>,
    requested_fields: Mutex<Vec<String>>,
}

impl StubPlacesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, place_ids: &[&str], next_page_token: Option<&str>) -> Self {
        self.push_page(NearbySearchResponse {
            status: "OK".to_string(),
            results: place_ids
                .iter()
                .map(|id| ResultStub {
                    place_id: id.to_string(),
                })
                .collect(),
            next_page_token: next_page_token.map(str::to_string),
            error_message: None,
        })
    }

    pub fn with_search_status(self, status: &str, error_message: Option<&str>) -> Self {
        self.push_page(NearbySearchResponse {
            status: status.to_string(),
            results: Vec::new(),
            next_page_token: None,
            error_message: error_message.map(str::to_string),
        })
    }

    pub fn with_details(
        mut self,
        place_id: &str,
        name: &str,
        address: &str,
        components: Vec<AddressComponent>,
    ) -> Self {
        self.details.insert(
            place_id.to_string(),
            PlaceDetailsResponse {
                status: "OK".to_string(),
                result: Some(PlaceDetails {
                    name: Some(name.to_string()),
                    formatted_address: Some(address.to_string()),
                    address_components: components,
                }),
                error_message: None,
            },
        );
        self
    }

    /// Details answer with `status` and no result body
    pub fn with_details_status(
        mut self,
        place_id: &str,
        status: &str,
        error_message: Option<&str>,
    ) -> Self {
        self.details.insert(
            place_id.to_string(),
            PlaceDetailsResponse {
                status: status.to_string(),
                result: None,
                error_message: error_message.map(str::to_string),
            },
        );
        self
    }

    pub fn with_details_transport_failure(mut self, place_id: &str) -> Self {
        self.transport_failures.insert(place_id.to_string());
        self
    }

    fn push_page(self, page: NearbySearchResponse) -> Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn search_calls(&self) -> Vec<(SearchRequest, Instant)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.lock().unwrap().len()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn detail_call_count(&self) -> usize {
        self.detail_calls.lock().unwrap().len()
    }

    /// Fields sent with the most recent details call
    pub fn requested_fields(&self) -> Vec<String> {
        self.requested_fields.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesApi for StubPlacesApi {
    async fn nearby_search(
        &self,
        request: &SearchRequest,
    ) -> Result<NearbySearchResponse, PlacesError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((request.clone(), Instant::now()));

        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PlacesError::Transport("no scripted search page left".to_string()))
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, PlacesError> {
        self.detail_calls.lock().unwrap().push(place_id.to_string());
        *self.requested_fields.lock().unwrap() = fields.iter().map(|f| f.to_string()).collect();

        if self.transport_failures.contains(place_id) {
            return Err(PlacesError::Transport("connection reset".to_string()));
        }

        Ok(self
            .details
            .get(place_id)
            .cloned()
            .unwrap_or_else(|| PlaceDetailsResponse {
                status: "NOT_FOUND".to_string(),
                result: None,
                error_message: None,
            }))
    }
}
