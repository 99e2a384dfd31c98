//! The two-phase forecast retrieval workflow.
//!
//! One run walks `Idle -> Loading -> {Success, Failed}`: validate the API
//! key, ask for the signed data URL, pause for the mandatory inter-call gap,
//! fetch the payload, and hand the first forecast day (or the normalized
//! error message) to the presentation boundary. A workflow is consumed by
//! running it; a second run requires a new instance.

use crate::config::ApiKey;
use crate::error::MiTiempoError;
use crate::forecast::client::ForecastApi;
use crate::types::envelopes::{DayForecast, ForecastEnvelope};
use crate::types::municipality::MunicipalityCode;
use crate::types::outcome::{ForecastOutcome, ForecastPresenter, ForecastReport};
use bon::bon;
use chrono::Local;
use log::{debug, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Mandatory pause between the redirect call and the payload call.
///
/// Part of the upstream API's rate-limiting contract; not an optimization,
/// never skipped or overlapped with other work.
pub const INTER_CALL_DELAY: Duration = Duration::from_millis(2000);

/// A single-use run of the two-phase retrieval for one municipality.
///
/// Generic over [`ForecastApi`] so the network layer can be substituted in
/// tests. Cancellation is the caller's: `run`/`fetch` are ordinary futures,
/// and aborting the task that polls them drops the in-flight sequence
/// without any further presenter callback.
///
/// # Examples
///
/// ```no_run
/// # use mitiempo::{AemetClient, ApiKey, ForecastWorkflow, MunicipalityCode, MiTiempoError};
/// # async fn run() -> Result<(), MiTiempoError> {
/// let client = AemetClient::builder().build()?;
/// let workflow = ForecastWorkflow::builder()
///     .api(client)
///     .api_key(ApiKey::from_env())
///     .municipality(MunicipalityCode::from("28065"))
///     .build();
/// let today = workflow.fetch().await?;
/// println!("max today: {:?}", today.temperature.max);
/// # Ok(())
/// # }
/// ```
pub struct ForecastWorkflow<A: ForecastApi> {
    api: A,
    api_key: ApiKey,
    municipality: MunicipalityCode,
}

#[bon]
impl<A: ForecastApi> ForecastWorkflow<A> {
    /// Creates a workflow via builder.
    ///
    /// # Arguments
    ///
    /// * `.api(A)`: **Required.** The [`ForecastApi`] implementation to call.
    /// * `.api_key(ApiKey)`: **Required.** Checked before any network call.
    /// * `.municipality(MunicipalityCode)`: **Required.** The forecast target.
    #[builder]
    pub fn new(api: A, api_key: ApiKey, municipality: MunicipalityCode) -> Self {
        ForecastWorkflow {
            api,
            api_key,
            municipality,
        }
    }

    /// Runs the workflow, applying side effects to `presenter` as states are
    /// entered, and returns the terminal outcome.
    ///
    /// Emits `on_loading` immediately, then exactly one of `on_success` /
    /// `on_error`. Every failure mode (missing key, rejected redirect,
    /// transport or decode failure, empty payload) normalizes to a single
    /// error message; nothing is retried and nothing panics.
    pub async fn run<P: ForecastPresenter + ?Sized>(self, presenter: &P) -> ForecastOutcome {
        ForecastOutcome::Loading.present(presenter);

        let outcome = match self.execute().await {
            Ok((envelope, day)) => {
                debug!(
                    "forecast retrieved for {} ({}), issued {}",
                    envelope.name, envelope.province, envelope.issued_at
                );
                ForecastOutcome::Data(ForecastReport::new(&envelope, day, Local::now()))
            }
            Err(e) => {
                warn!("forecast retrieval failed: {e}");
                ForecastOutcome::Error {
                    message: e.to_string(),
                }
            }
        };

        outcome.present(presenter);
        outcome
    }

    /// Presenter-free variant: runs the workflow and returns today's
    /// forecast day.
    ///
    /// # Errors
    ///
    /// Returns the same [`MiTiempoError`] taxonomy `run` would have turned
    /// into an `on_error` message.
    pub async fn fetch(self) -> Result<DayForecast, MiTiempoError> {
        self.execute().await.map(|(_, day)| day)
    }

    async fn execute(&self) -> Result<(ForecastEnvelope, DayForecast), MiTiempoError> {
        // Short-circuit before any network call when the key is absent or
        // still the project template value.
        if !self.api_key.is_configured() {
            warn!("AEMET API key is missing or still the template value");
            return Err(MiTiempoError::ApiKeyNotConfigured);
        }

        debug!(
            "starting two-phase retrieval for municipality {}",
            self.municipality
        );

        let redirect = self
            .api
            .fetch_redirect(&self.municipality, &self.api_key)
            .await?;

        if redirect.status != 200 {
            return Err(MiTiempoError::redirect_rejected(
                redirect.status,
                &redirect.description,
            ));
        }

        let data_url = redirect
            .data_url
            .filter(|url| !url.is_empty())
            .ok_or(MiTiempoError::MissingDataUrl)?;
        debug!("data URL obtained: {data_url}");

        // The API rate-limits back-to-back calls; the pause between the two
        // requests is part of its contract, not tunable.
        sleep(INTER_CALL_DELAY).await;

        let envelopes = self
            .api
            .fetch_forecast(&data_url)
            .await
            .map_err(MiTiempoError::FetchFailed)?;

        let envelope = envelopes
            .into_iter()
            .next()
            .ok_or(MiTiempoError::EmptyPrediction)?;

        let day = envelope
            .prediction
            .days
            .first()
            .cloned()
            .ok_or(MiTiempoError::NoDataForToday)?;

        Ok((envelope, day))
    }
}
