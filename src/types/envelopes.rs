//! Data structures for the two AEMET OpenData responses: the redirect
//! envelope returned by the municipality endpoint and the forecast payload
//! behind the signed data URL it points at.
//!
//! Field names on the wire are Spanish (`estado`, `datos`, `prediccion`, ...);
//! serde renames map them onto the English names used throughout the crate.
//! All of these values are request-scoped: decoded from one response,
//! handed to the presentation boundary, then dropped.

use serde::Deserialize;

/// First response of the two-phase protocol: a status plus a pointer URL to
/// the real forecast payload.
///
/// Only meaningful when `status == 200`; rejected requests still come back as
/// a well-formed envelope with a human-readable `description`.
#[derive(Debug, Clone, Deserialize)]
pub struct RedirectEnvelope {
    #[serde(rename = "estado")]
    pub status: u16,
    /// Upstream reason text; absent on some success responses.
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Absolute, pre-signed URL of the forecast payload. Not present on
    /// rejected requests.
    #[serde(rename = "datos")]
    pub data_url: Option<String>,
}

/// The multi-day forecast payload for one municipality. The API returns a
/// list of these; only the first element is meaningful.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEnvelope {
    /// Timestamp at which the forecast was issued by AEMET.
    #[serde(rename = "elaborado")]
    pub issued_at: String,
    #[serde(rename = "id")]
    pub municipality_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "prediccion")]
    pub prediction: Prediction,
}

/// Wrapper around the per-day forecast list (`prediccion.dia` on the wire).
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    /// Ordered forecast days, today first. May be empty; consumers must treat
    /// that as "no data", never index blindly.
    #[serde(rename = "dia", default)]
    pub days: Vec<DayForecast>,
}

/// Forecast for a single day.
#[derive(Debug, Clone, Deserialize)]
pub struct DayForecast {
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "temperatura")]
    pub temperature: Temperature,
    #[serde(rename = "estadoCielo", default)]
    pub sky_states: Vec<SkyState>,
    #[serde(rename = "viento", default)]
    pub wind: Vec<Wind>,
}

/// Daily temperature extremes in °C. Either bound may be missing
/// independently; rendering substitutes a placeholder instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct Temperature {
    #[serde(rename = "maxima")]
    pub max: Option<i32>,
    #[serde(rename = "minima")]
    pub min: Option<i32>,
}

/// Sky condition for a period of the day (e.g. "Despejado").
#[derive(Debug, Clone, Deserialize)]
pub struct SkyState {
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "periodo")]
    pub period: Option<String>,
    #[serde(default)]
    pub value: String,
}

/// Wind forecast for a period of the day.
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    #[serde(rename = "direccion")]
    pub direction: String,
    #[serde(rename = "periodo")]
    pub period: Option<String>,
    #[serde(rename = "velocidad")]
    pub speed: i32,
}
