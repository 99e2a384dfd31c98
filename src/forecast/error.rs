use thiserror::Error;

/// Transport and decode failures of the AEMET HTTP client.
#[derive(Debug, Error)]
pub enum ForecastClientError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Malformed JSON from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
