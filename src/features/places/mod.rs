//! Nearby places search feature.
//!
//! Searches the places provider around a point, follows every continuation
//! page, looks up details for each hit and flattens them into normalized
//! location records.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/places/search` | Keyword search around `lat`/`lng` within `radius` meters |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::GooglePlacesClient;
pub use services::EnrichmentPipeline;
