//! This module provides the main entry point for fetching AEMET daily
//! forecasts. It bundles the HTTP client with an API key and mints
//! single-use workflows for a municipality.

use crate::config::ApiKey;
use crate::error::MiTiempoError;
use crate::forecast::client::AemetClient;
use crate::forecast::workflow::ForecastWorkflow;
use crate::types::envelopes::DayForecast;
use crate::types::municipality::MunicipalityCode;
use bon::bon;
use std::time::Duration;

/// Municipality code the original application was built around: Getafe,
/// Madrid.
pub const DEFAULT_MUNICIPALITY: &str = "28065";

/// The main client struct for fetching AEMET daily forecasts.
///
/// Holds the HTTP client and the API key; each forecast request goes through
/// a fresh, single-use [`ForecastWorkflow`] so the two-phase sequence is
/// never re-entered while in flight.
///
/// # Examples
///
/// ```no_run
/// # use mitiempo::{MiTiempo, MiTiempoError};
/// # async fn run() -> Result<(), MiTiempoError> {
/// // Reads the key from the AEMET_API_KEY environment variable.
/// let mitiempo = MiTiempo::builder().build()?;
/// let today = mitiempo.daily_forecast().call().await?;
/// println!("max: {:?} min: {:?}", today.temperature.max, today.temperature.min);
/// # Ok(())
/// # }
/// ```
pub struct MiTiempo {
    client: AemetClient,
    api_key: ApiKey,
}

#[bon]
impl MiTiempo {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(ApiKey)`: Optional. Defaults to [`ApiKey::from_env`]. An
    ///   unconfigured key is not an error here; the workflow reports it when
    ///   a fetch is attempted.
    /// * `.base_url(String)`: Optional. Defaults to the production AEMET
    ///   endpoint; overridable for tests.
    /// * `.timeout(Duration)`: Optional. Per-request timeout, default 30 s.
    ///
    /// # Errors
    ///
    /// Returns [`MiTiempoError::Client`] if the HTTP client cannot be built.
    #[builder]
    pub fn new(
        api_key: Option<ApiKey>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, MiTiempoError> {
        let client = AemetClient::builder()
            .maybe_base_url(base_url)
            .maybe_timeout(timeout)
            .build()?;
        Ok(MiTiempo {
            client,
            api_key: api_key.unwrap_or_else(ApiKey::from_env),
        })
    }

    /// Mints a fresh single-use workflow for `municipality`.
    ///
    /// Use this when you want presenter callbacks or control over the task
    /// the run executes on; for a plain value, see
    /// [`MiTiempo::daily_forecast`].
    pub fn workflow(&self, municipality: MunicipalityCode) -> ForecastWorkflow<AemetClient> {
        ForecastWorkflow::builder()
            .api(self.client.clone())
            .api_key(self.api_key.clone())
            .municipality(municipality)
            .build()
    }

    /// Fetches today's forecast for a municipality.
    ///
    /// # Arguments
    ///
    /// * `.municipality(MunicipalityCode)`: Optional. Defaults to Getafe
    ///   ([`DEFAULT_MUNICIPALITY`]).
    ///
    /// # Errors
    ///
    /// Any [`MiTiempoError`]: unconfigured key, rejected redirect, transport
    /// or decode failure, or an empty forecast.
    #[builder]
    pub async fn daily_forecast(
        &self,
        municipality: Option<MunicipalityCode>,
    ) -> Result<DayForecast, MiTiempoError> {
        let municipality =
            municipality.unwrap_or_else(|| MunicipalityCode::from(DEFAULT_MUNICIPALITY));
        self.workflow(municipality).fetch().await
    }
}
