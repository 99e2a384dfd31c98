//! API key handling for the AEMET OpenData API.
//!
//! The key is supplied out of band (environment variable or build
//! configuration) and an absent or template value is a first-class,
//! detectable condition rather than a crash: the workflow short-circuits to
//! its error state before making any network call.

use std::env;
use std::fmt;

/// Environment variable the key is read from by [`ApiKey::from_env`].
pub const API_KEY_ENV_VAR: &str = "AEMET_API_KEY";

/// Template value shipped in project skeletons; treated the same as an
/// empty key.
pub const API_KEY_PLACEHOLDER: &str = "PON_TU_API_KEY_AQUÍ";

/// An AEMET OpenData API key.
///
/// Construction sanitizes stray double quotes (keys pasted into properties
/// files tend to keep them). Use [`ApiKey::is_configured`] before doing any
/// network work.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key string, stripping any double quotes.
    pub fn new(raw: impl Into<String>) -> Self {
        ApiKey(raw.into().replace('"', ""))
    }

    /// Reads the key from the `AEMET_API_KEY` environment variable.
    ///
    /// An unset variable yields an unconfigured key, not an error; the
    /// workflow reports it as "API key not configured".
    pub fn from_env() -> Self {
        ApiKey::new(env::var(API_KEY_ENV_VAR).unwrap_or_default())
    }

    /// True when the key is non-empty and not the shipped placeholder.
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty() && self.0 != API_KEY_PLACEHOLDER
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keys are credentials; keep them out of logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "ApiKey(<empty>)")
        } else {
            write!(f, "ApiKey(<redacted>)")
        }
    }
}
