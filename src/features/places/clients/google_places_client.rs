use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::config::PlacesConfig;
use crate::features::places::clients::PlacesApi;
use crate::features::places::models::{
    NearbySearchResponse, PlaceDetailsResponse, PlacesError, SearchRequest,
};

/// HTTP client for the Google Places web service
pub struct GooglePlacesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let client = reqwest::Client::builder()
            .user_agent("NearbyPlacesService/0.1")
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| PlacesError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Query string for a nearby search call, without the API key
    fn search_params(request: &SearchRequest) -> String {
        match request {
            SearchRequest::Initial(query) => format!(
                "location={},{}&radius={}&keyword={}",
                query.latitude,
                query.longitude,
                query.radius_meters,
                urlencoding::encode(&query.keyword)
            ),
            SearchRequest::NextPage(token) => {
                format!("pagetoken={}", urlencoding::encode(token))
            }
        }
    }

    fn details_params(place_id: &str, fields: &[&str]) -> String {
        format!(
            "place_id={}&fields={}",
            urlencoding::encode(place_id),
            fields.join(",")
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &str,
    ) -> Result<T, PlacesError> {
        tracing::debug!("Places request: {}?{}", path, params);

        let url = format!(
            "{}/{}?key={}&{}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key),
            params
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            // reqwest errors embed the URL, which carries the key
            let e = e.without_url();
            tracing::error!("Places request to {} failed: {}", path, e);
            PlacesError::Transport(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Places provider returned HTTP {} for {}", status, path);
            return Err(PlacesError::Transport(format!(
                "Places provider returned HTTP {}",
                status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse places response from {}: {}", path, e);
            PlacesError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn nearby_search(
        &self,
        request: &SearchRequest,
    ) -> Result<NearbySearchResponse, PlacesError> {
        self.get_json("nearbysearch/json", &Self::search_params(request)).await
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, PlacesError> {
        self.get_json("details/json", &Self::details_params(place_id, fields)).await
    }
}
