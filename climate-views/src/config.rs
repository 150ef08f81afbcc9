//! Dashboard configuration.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "snapshot_date": "2023-02-14", "default_city": "Madrid" }
//! ```

use chrono::NaiveDate;
use climate_obs::City;
use serde::{Deserialize, Serialize};

/// File name of the monthly aggregate export.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "climate_monthly_final.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Day shown on the world map
    pub snapshot_date: NaiveDate,
    /// Initial value of both city selectors
    pub default_city: City,
    /// File name offered by the download action
    pub download_filename: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            snapshot_date: NaiveDate::from_ymd_opt(2023, 2, 14).unwrap_or_default(),
            default_city: City::Berlin,
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> serde_json::Result<DashboardConfig> {
        serde_json::from_str(json)
    }
}
