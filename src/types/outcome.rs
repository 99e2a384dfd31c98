//! The presentation boundary: the three-state outcome of a forecast run and
//! the callbacks a screen (or any other surface) implements to render it.

use crate::render::{format_temperature, format_timestamp};
use crate::types::envelopes::{DayForecast, ForecastEnvelope};
use chrono::{DateTime, Local};

/// Everything the presentation surface needs to render a successful run:
/// the raw forecast day plus pre-formatted labels.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    /// Municipality name as reported by AEMET (e.g. "Getafe").
    pub name: String,
    pub province: String,
    /// First day of the forecast, today.
    pub day: DayForecast,
    /// Maximum temperature label, `"--°C"` when the value is absent.
    pub max_label: String,
    /// Minimum temperature label, `"--°C"` when the value is absent.
    pub min_label: String,
    /// Local timestamp of this run, `dd/mm/yyyy HH:MM`.
    pub updated_at: String,
}

impl ForecastReport {
    /// Assembles a report from the first forecast day of `envelope`.
    pub fn new(envelope: &ForecastEnvelope, day: DayForecast, now: DateTime<Local>) -> Self {
        ForecastReport {
            name: envelope.name.clone(),
            province: envelope.province.clone(),
            max_label: format_temperature(day.temperature.max),
            min_label: format_temperature(day.temperature.min),
            updated_at: format_timestamp(now),
            day,
        }
    }
}

/// Closed three-state outcome of the forecast workflow.
///
/// Modeled as a tagged enum (not visibility flags) so that rendering is an
/// exhaustive match and no state can silently go unhandled.
#[derive(Debug, Clone)]
pub enum ForecastOutcome {
    /// The two-phase retrieval is in flight.
    Loading,
    /// Retrieval succeeded; carries the report for today.
    Data(ForecastReport),
    /// Retrieval failed; carries the single user-visible message every
    /// failure mode normalizes to.
    Error { message: String },
}

impl ForecastOutcome {
    /// Dispatches this outcome to the matching presenter callback.
    pub fn present<P: ForecastPresenter + ?Sized>(&self, presenter: &P) {
        match self {
            ForecastOutcome::Loading => presenter.on_loading(),
            ForecastOutcome::Data(report) => presenter.on_success(report),
            ForecastOutcome::Error { message } => presenter.on_error(message),
        }
    }
}

/// Callbacks applied to the presentation surface as the workflow advances.
///
/// Implementations are invoked from the workflow's own execution context;
/// they should only hand the values over to whatever owns the surface.
pub trait ForecastPresenter: Send + Sync {
    fn on_loading(&self);
    fn on_success(&self, report: &ForecastReport);
    fn on_error(&self, message: &str);
}
