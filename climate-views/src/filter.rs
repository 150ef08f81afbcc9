//! Selector value validation.

use climate_obs::{City, UnknownCity};
use thiserror::Error;

/// A selector value outside the known option set. Recovered by the view
/// builders as an empty render, never surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter value {0:?}")]
    UnknownFilterValue(String),
}

impl From<UnknownCity> for FilterError {
    fn from(err: UnknownCity) -> Self {
        FilterError::UnknownFilterValue(err.0)
    }
}

/// Parse a city selector value.
pub fn parse_city(value: &str) -> Result<City, FilterError> {
    Ok(value.parse::<City>()?)
}
