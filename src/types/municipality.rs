use std::fmt;

/// Identifier of a forecast target municipality in the AEMET OpenData API
/// (e.g. `"28065"` for Getafe).
///
/// The API treats these as opaque strings; no numeric validation is applied
/// here so that codes with leading zeros survive round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MunicipalityCode(String);

impl MunicipalityCode {
    pub fn new(code: impl Into<String>) -> Self {
        MunicipalityCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MunicipalityCode {
    fn from(code: &str) -> Self {
        MunicipalityCode::new(code)
    }
}

impl fmt::Display for MunicipalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
