//! The immutable dataset store.
//!
//! Four datasets are loaded once at startup and never mutated afterwards, so a
//! store can be shared across every session behind an `Arc` without locking.
//!
//! # Files
//!
//! - `climate_final.csv`: observations feeding the world map snapshot
//! - `df_temp.csv`: observations feeding the monthly aggregates and line series
//! - `df_monthly_avg.csv`: month x city average temperatures (wide)
//! - `df_monthly_final.csv`: per month and city aggregates, also the download

use crate::{
    error::{DatasetError, Result},
    observation::ObservationRow,
    table::Table,
};
use std::{fs, path::Path};

pub const CLIMATE_FILE: &str = "climate_final.csv";
pub const TEMPERATURE_FILE: &str = "df_temp.csv";
pub const MONTHLY_AVG_FILE: &str = "df_monthly_avg.csv";
pub const MONTHLY_FINAL_FILE: &str = "df_monthly_final.csv";

/// The four loaded datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStore {
    climate: Vec<ObservationRow>,
    temperatures: Vec<ObservationRow>,
    monthly_avg: Table,
    monthly_final: Table,
}

impl DatasetStore {
    /// Build the store from the four CSV payloads. Every dataset must be non-empty.
    pub fn from_csv(
        climate_csv: &str,
        temperature_csv: &str,
        monthly_avg_csv: &str,
        monthly_final_csv: &str,
    ) -> Result<DatasetStore> {
        let climate = ObservationRow::parse_csv(CLIMATE_FILE, climate_csv)?;
        let temperatures = ObservationRow::parse_csv(TEMPERATURE_FILE, temperature_csv)?;
        let monthly_avg = Table::from_csv(MONTHLY_AVG_FILE, monthly_avg_csv)?;
        let monthly_final = Table::from_csv(MONTHLY_FINAL_FILE, monthly_final_csv)?;

        if climate.is_empty() {
            return Err(DatasetError::EmptyDataset(CLIMATE_FILE));
        }
        if temperatures.is_empty() {
            return Err(DatasetError::EmptyDataset(TEMPERATURE_FILE));
        }
        if monthly_avg.is_empty() {
            return Err(DatasetError::EmptyDataset(MONTHLY_AVG_FILE));
        }
        if monthly_final.is_empty() {
            return Err(DatasetError::EmptyDataset(MONTHLY_FINAL_FILE));
        }

        Ok(DatasetStore {
            climate,
            temperatures,
            monthly_avg,
            monthly_final,
        })
    }

    /// Read the four files from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<DatasetStore> {
        let dir = dir.as_ref();
        log::info!("loading datasets from {}", dir.display());
        let read = |name: &str| fs::read_to_string(dir.join(name));
        DatasetStore::from_csv(
            &read(CLIMATE_FILE)?,
            &read(TEMPERATURE_FILE)?,
            &read(MONTHLY_AVG_FILE)?,
            &read(MONTHLY_FINAL_FILE)?,
        )
    }

    pub fn climate(&self) -> &[ObservationRow] {
        &self.climate
    }

    pub fn temperatures(&self) -> &[ObservationRow] {
        &self.temperatures
    }

    pub fn monthly_avg(&self) -> &Table {
        &self.monthly_avg
    }

    pub fn monthly_final(&self) -> &Table {
        &self.monthly_final
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;

    const OBS: &str = "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n\
        2023-02-14,Madrid,Spain,8.1,13.2,4.0,Feb,2\n";
    const OBS_EMPTY: &str = "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n";
    const AVG: &str = "month,month_num,Berlin\nFeb,2,1.9\n";
    const FINAL: &str = "month,month_num,city,avgtemp_c\nFeb,2,Berlin,1.9\n";

    #[test]
    fn builds_from_csv_payloads() {
        let store = DatasetStore::from_csv(OBS, OBS, AVG, FINAL).unwrap();
        assert_eq!(store.climate().len(), 1);
        assert_eq!(store.temperatures()[0].city, City::Madrid);
        assert_eq!(store.monthly_avg().columns().len(), 3);
        assert_eq!(store.monthly_final().len(), 1);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = DatasetStore::from_csv(OBS, OBS_EMPTY, AVG, FINAL).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyDataset(TEMPERATURE_FILE)));
    }

    #[test]
    fn loads_the_fixture_directory() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
        let store = DatasetStore::load_dir(dir).unwrap();
        assert!(!store.temperatures().is_empty());
        assert_eq!(store.monthly_avg().len(), 12);
        assert_eq!(store.monthly_final().len(), 48);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = DatasetStore::load_dir("/definitely/not/here").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
