mod config;
mod error;
mod forecast;
mod mitiempo;
mod render;
mod types;

pub use error::MiTiempoError;
pub use mitiempo::*;

pub use config::{ApiKey, API_KEY_ENV_VAR, API_KEY_PLACEHOLDER};

pub use forecast::client::*;
pub use forecast::workflow::*;

pub use types::envelopes::*;
pub use types::municipality::MunicipalityCode;
pub use types::outcome::*;

pub use render::{format_temperature, format_timestamp};

pub use forecast::error::ForecastClientError;
