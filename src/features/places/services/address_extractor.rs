use crate::features::places::models::{AddressComponent, ExtractedAddress};
use crate::shared::constants::NOT_AVAILABLE;

const LOCALITY: &str = "locality";
const ADMIN_AREA_LEVEL_1: &str = "administrative_area_level_1";
const COUNTRY: &str = "country";
const POSTAL_CODE: &str = "postal_code";

/// Map provider address components to city/state/country/pincode.
///
/// Each component lands in at most one field, checked in the order
/// locality, administrative_area_level_1, country, postal_code. When several
/// components match the same field the last one wins. Unmatched fields stay "NA".
pub fn extract_address(components: &[AddressComponent]) -> ExtractedAddress {
    let mut address = ExtractedAddress {
        city: NOT_AVAILABLE.to_string(),
        state: NOT_AVAILABLE.to_string(),
        country: NOT_AVAILABLE.to_string(),
        pincode: NOT_AVAILABLE.to_string(),
    };

    for component in components {
        let slot = if component.has_type(LOCALITY) {
            &mut address.city
        } else if component.has_type(ADMIN_AREA_LEVEL_1) {
            &mut address.state
        } else if component.has_type(COUNTRY) {
            &mut address.country
        } else if component.has_type(POSTAL_CODE) {
            &mut address.pincode
        } else {
            continue;
        };
        *slot = component.long_name.clone();
    }

    address
}
