use crate::forecast::error::ForecastClientError;
use thiserror::Error;

/// Top-level error for the crate. Every failure of the two-phase retrieval,
/// from a missing API key to a malformed payload, normalizes to one of these
/// variants; the workflow boundary turns them into a single user-visible
/// message and nothing propagates further.
#[derive(Debug, Error)]
pub enum MiTiempoError {
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    /// The redirect envelope came back with a non-200 embedded status.
    #[error("could not obtain forecast data URL: {description}")]
    RedirectRejected { status: u16, description: String },

    /// Embedded status was 200 but the envelope carried no data URL.
    #[error("redirect envelope did not include a data URL")]
    MissingDataUrl,

    /// The second call (forecast payload) failed at transport or decode level.
    #[error("fetch failed: {0}")]
    FetchFailed(#[source] ForecastClientError),

    #[error("empty prediction list")]
    EmptyPrediction,

    #[error("no data for today")]
    NoDataForToday,

    /// First-call transport/decode failures surface verbatim.
    #[error(transparent)]
    Client(#[from] ForecastClientError),
}

impl MiTiempoError {
    /// Builds a [`MiTiempoError::RedirectRejected`], substituting `"unknown"`
    /// when the upstream envelope carried no description.
    pub(crate) fn redirect_rejected(status: u16, description: &str) -> Self {
        let description = if description.is_empty() {
            "unknown".to_string()
        } else {
            description.to_string()
        };
        MiTiempoError::RedirectRejected {
            status,
            description,
        }
    }
}
