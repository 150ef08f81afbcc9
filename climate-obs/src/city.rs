use crate::error::UnknownCity;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the four cities covered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    Berlin,
    Paris,
    Madrid,
    #[serde(rename = "Tel Aviv-Yafo")]
    TelAviv,
}

impl City {
    /// All cities in selector order.
    pub const ALL: [City; 4] = [City::Berlin, City::Paris, City::Madrid, City::TelAviv];

    /// Display name, identical to the value stored in the datasets.
    pub fn name(&self) -> &'static str {
        match self {
            City::Berlin => "Berlin",
            City::Paris => "Paris",
            City::Madrid => "Madrid",
            City::TelAviv => "Tel Aviv-Yafo",
        }
    }

    /// Country name as used by the world map.
    pub fn country(&self) -> &'static str {
        match self {
            City::Berlin => "Germany",
            City::Paris => "France",
            City::Madrid => "Spain",
            City::TelAviv => "Israel",
        }
    }

    /// Series color for charts grouped by city.
    pub fn color(&self) -> &'static str {
        match self {
            City::Berlin => "#6495ed",
            City::Madrid => "#ffb347",
            City::Paris => "#e6a8d7",
            City::TelAviv => "#93c572",
        }
    }

    /// The selector option values, in selector order.
    pub fn names() -> Vec<&'static str> {
        City::ALL.iter().map(City::name).collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}
