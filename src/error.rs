use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single HTTP exchange with the places API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Built from errors already stripped of their URL, whose query
    /// string carries the API key.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(http::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Missing places API key: set places.api_key or GOOGLE_PLACES_API_KEY")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] TransportError),

    #[error("Failed to fetch nearby restaurants: {0}")]
    NearbySearch(#[source] TransportError),

    #[error("Failed to fetch details for restaurant {name}: {source}")]
    PlaceDetails {
        name: String,
        #[source]
        source: TransportError,
    },

    #[error(
        "Google Places API Error: {status}{}",
        .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default()
    )]
    Api {
        status: String,
        message: Option<String>,
    },

    #[error("Details response for restaurant {name} has no result")]
    MissingDetails { name: String },
}

impl Error {
    /// Upstream status carried by an API error, if any.
    pub fn api_status(&self) -> Option<&str> {
        match self {
            Error::Api { status, .. } => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_includes_status_and_message() {
        let err = Error::Api {
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Google Places API Error: REQUEST_DENIED - The provided API key is invalid."
        );
        assert_eq!(err.api_status(), Some("REQUEST_DENIED"));
    }

    #[test]
    fn api_error_without_message() {
        let err = Error::Api {
            status: "INVALID_REQUEST".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Google Places API Error: INVALID_REQUEST");
    }

    #[test]
    fn details_transport_error_names_restaurant() {
        let err = Error::PlaceDetails {
            name: "Tartine".to_string(),
            source: TransportError::Status(http::StatusCode::BAD_GATEWAY),
        };
        let text = err.to_string();
        assert!(text.starts_with("Failed to fetch details for restaurant Tartine"));
        assert!(text.contains("502"));
    }
}
