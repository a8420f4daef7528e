/// Placeholder for any place field the provider does not supply
pub const NOT_AVAILABLE: &str = "NA";

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MSG_SUCCESS: &str = "Success";

pub const MSG_NO_RESULTS: &str = "No results found for the given keyword and location.";

pub const ERR_MISSING_PARAMETERS: &str =
    "Missing required parameters. Please provide lat, lng, radius, and keyword.";

pub const ERR_INVALID_PARAMETER_TYPES: &str =
    "Invalid parameter types. lat, lng, and radius must be numbers.";

pub const ERR_MALFORMED_JSON: &str = "Invalid JSON body";

pub const ERR_INTERNAL: &str = "Internal server error";

// =============================================================================
// WORKER PROCESS
// =============================================================================

/// Environment variable that switches the binary into worker mode.
/// The supervisor sets it to the slot index of the spawned process.
pub const WORKER_SLOT_ENV: &str = "PLACES_WORKER_SLOT";
