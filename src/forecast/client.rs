//! HTTP client for the AEMET OpenData two-phase forecast protocol.
//!
//! The API never serves the forecast payload directly: the municipality
//! endpoint returns a [`RedirectEnvelope`] whose `datos` field is a signed,
//! absolute URL, and a second GET against that opaque URL yields the actual
//! payload. The client therefore exposes exactly those two operations and
//! makes no base-path assumption for the second call.

use crate::config::ApiKey;
use crate::forecast::error::ForecastClientError;
use crate::types::envelopes::{ForecastEnvelope, RedirectEnvelope};
use crate::types::municipality::MunicipalityCode;
use async_trait::async_trait;
use bon::bon;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Production base URL of the AEMET OpenData API.
pub const AEMET_BASE_URL: &str = "https://opendata.aemet.es/opendata/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The two operations of the forecast retrieval protocol.
///
/// [`AemetClient`] is the production implementation; the workflow is generic
/// over this trait so tests can substitute a scripted fake.
#[async_trait]
pub trait ForecastApi: Send + Sync {
    /// Call 1: asks the municipality endpoint for the signed URL of the
    /// forecast payload. Fails on transport errors or malformed JSON; an
    /// embedded non-200 `estado` still decodes successfully and is the
    /// workflow's concern.
    async fn fetch_redirect(
        &self,
        code: &MunicipalityCode,
        api_key: &ApiKey,
    ) -> Result<RedirectEnvelope, ForecastClientError>;

    /// Call 2: fetches the forecast payload from the opaque absolute URL
    /// obtained in call 1.
    async fn fetch_forecast(
        &self,
        url: &str,
    ) -> Result<Vec<ForecastEnvelope>, ForecastClientError>;
}

/// HTTP implementation of [`ForecastApi`] over [`reqwest`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct AemetClient {
    http: Client,
    base_url: String,
}

#[bon]
impl AemetClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. Defaults to [`AEMET_BASE_URL`];
    ///   overridable mainly so tests can point at a local mock server.
    /// * `.timeout(Duration)`: Optional. Per-request timeout, default 30 s.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastClientError::ClientBuild`] if the underlying HTTP
    /// client cannot be initialized.
    #[builder]
    pub fn new(
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ForecastClientError> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ForecastClientError::ClientBuild)?;
        Ok(AemetClient {
            http,
            base_url: base_url.unwrap_or_else(|| AEMET_BASE_URL.to_string()),
        })
    }

    /// Performs a GET and decodes the JSON body.
    ///
    /// AEMET serves the payload in ISO-8859-15 with an unreliable charset
    /// header, so the body is read as bytes and re-decoded lossily before
    /// parsing instead of trusting `Response::json`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        api_key: Option<&ApiKey>,
    ) -> Result<T, ForecastClientError> {
        debug!("GET {}", url);

        let mut request = self.http.get(url);
        if let Some(key) = api_key {
            request = request.header("api_key", key.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ForecastClientError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ForecastClientError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ForecastClientError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ForecastClientError::BodyRead(url.to_string(), e))?;
        let body = String::from_utf8_lossy(&bytes);

        serde_json::from_str(&body).map_err(|e| ForecastClientError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl ForecastApi for AemetClient {
    async fn fetch_redirect(
        &self,
        code: &MunicipalityCode,
        api_key: &ApiKey,
    ) -> Result<RedirectEnvelope, ForecastClientError> {
        let url = format!(
            "{}/prediccion/especifica/municipio/diaria/{}",
            self.base_url, code
        );
        self.get_json(&url, Some(api_key)).await
    }

    async fn fetch_forecast(
        &self,
        url: &str,
    ) -> Result<Vec<ForecastEnvelope>, ForecastClientError> {
        // `url` is the pre-signed URL from call 1, used as-is.
        self.get_json(url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_base_url() {
        let client = AemetClient::builder().build().unwrap();
        assert_eq!(client.base_url, AEMET_BASE_URL);
    }

    #[test]
    fn base_url_is_overridable() {
        let client = AemetClient::builder()
            .base_url("http://127.0.0.1:9000".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9000");
    }
}
