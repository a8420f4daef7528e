mod error;
mod place;
mod provider;
mod query;

pub use error::{PlacesError, ProviderOperation};
pub use place::{ExtractedAddress, NormalizedPlace};
pub use provider::{
    AddressComponent, NearbySearchResponse, PlaceDetails, PlaceDetailsResponse, ResultStub,
    STATUS_OK, STATUS_ZERO_RESULTS,
};
pub use query::{PlaceQuery, SearchRequest};
