mod google_places_client;
mod places_api;

pub use google_places_client::GooglePlacesClient;
pub use places_api::PlacesApi;
