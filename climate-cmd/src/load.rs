//! Dataset and config loading shared by every command.

use crate::DataArgs;
use anyhow::Context;
use climate_obs::DatasetStore;
use climate_views::{DashboardConfig, DashboardData};
use log::info;

pub fn load_config(args: &DataArgs) -> anyhow::Result<DashboardConfig> {
    let Some(path) = &args.config else {
        return Ok(DashboardConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    DashboardConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Load the datasets and derive the dashboard aggregates.
pub fn load(args: &DataArgs) -> anyhow::Result<DashboardData> {
    let config = load_config(args)?;
    let store = DatasetStore::load_dir(&args.data_dir)
        .with_context(|| format!("Failed to load datasets from {}", args.data_dir.display()))?;
    info!(
        "Loaded {} observations and {} monthly rows from {}",
        store.temperatures().len(),
        store.monthly_final().len(),
        args.data_dir.display()
    );
    DashboardData::build(store, config).context("Failed to aggregate datasets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixture_args;
    use climate_obs::City;

    #[test]
    fn loads_fixtures_with_default_config() {
        let data = load(&fixture_args()).unwrap();
        assert_eq!(data.config(), &DashboardConfig::default());
        assert_eq!(data.store().monthly_final().len(), 48);
    }

    #[test]
    fn reads_config_file() {
        let dir = std::env::temp_dir().join(format!("climate-cmd-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "default_city": "Paris" }"#).unwrap();

        let args = DataArgs {
            config: Some(path),
            ..fixture_args()
        };
        assert_eq!(load_config(&args).unwrap().default_city, City::Paris);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let args = DataArgs {
            data_dir: "/nonexistent/climate".into(),
            config: None,
        };
        assert!(load(&args).is_err());
    }
}
