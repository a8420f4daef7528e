use std::fmt;

use thiserror::Error;

/// Which provider endpoint a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOperation {
    Search,
    Details,
}

impl fmt::Display for ProviderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderOperation::Search => write!(f, "places"),
            ProviderOperation::Details => write!(f, "place details"),
        }
    }
}

/// Failures talking to the places provider. None of them are retried.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Provider answered with a status other than the accepted ones
    #[error("Error fetching {operation}: {status} - {message}")]
    Provider {
        operation: ProviderOperation,
        status: String,
        message: String,
    },

    #[error("Places provider request failed: {0}")]
    Transport(String),

    #[error("Failed to parse places provider response: {0}")]
    Decode(String),

    /// Provider kept issuing continuation tokens past the page cap
    #[error("Error fetching places: still paginating after {0} pages")]
    PageLimit(usize),
}

impl PlacesError {
    pub fn provider(
        operation: ProviderOperation,
        status: impl Into<String>,
        message: Option<String>,
    ) -> Self {
        PlacesError::Provider {
            operation,
            status: status.into(),
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "No error message provided".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = PlacesError::provider(
            ProviderOperation::Search,
            "REQUEST_DENIED",
            Some("The provided API key is invalid.".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Error fetching places: REQUEST_DENIED - The provided API key is invalid."
        );
    }

    #[test]
    fn test_provider_error_default_message() {
        let err = PlacesError::provider(ProviderOperation::Details, "NOT_FOUND", None);
        assert_eq!(
            err.to_string(),
            "Error fetching place details: NOT_FOUND - No error message provided"
        );
    }
}
