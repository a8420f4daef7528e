use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// City/state/country/postal code pulled out of provider address components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAddress {
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

/// One location returned to the caller; absent fields hold "NA"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedPlace {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}
