//! Loaded data plus the aggregates derived from it once at startup.

use crate::{config::DashboardConfig, download::Download};
use climate_data::{
    enrich_with_group_means, group_average, sort_by_field, AggregateError, AggregateRow,
    EnrichedRow,
};
use climate_obs::{DatasetError, DatasetStore, ObservationRow};
use thiserror::Error;

/// Grouping of the monthly bar chart aggregate.
pub const MONTHLY_KEYS: [&str; 3] = ["month", "city", "month_num"];
/// Grouping of the min/max line series.
pub const LINE_KEYS: [&str; 2] = ["month", "city"];

/// Startup failure. Either the datasets do not aggregate or the export
/// cannot be serialized; both abort initialization.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Immutable input of every view builder. Shared read-only across sessions.
#[derive(Debug, Clone)]
pub struct DashboardData {
    store: DatasetStore,
    config: DashboardConfig,
    /// Monthly mean `avgtemp_c` per (month, city), sorted by `month_num`
    monthly_means: Vec<AggregateRow>,
    /// Temperature rows annotated with their (month, city) max/min means
    temperature_series: Vec<EnrichedRow<ObservationRow>>,
    download: Download,
}

impl DashboardData {
    /// Derive every static aggregate from the store.
    pub fn build(store: DatasetStore, config: DashboardConfig) -> Result<Self, BuildError> {
        let mut monthly_means = group_average(store.temperatures(), &MONTHLY_KEYS, &["avgtemp_c"])?;
        sort_by_field(&mut monthly_means, "month_num")?;

        let line_means =
            group_average(store.temperatures(), &LINE_KEYS, &["maxtemp_c", "mintemp_c"])?;
        let temperature_series =
            enrich_with_group_means(store.temperatures(), &LINE_KEYS, &line_means)?;

        let download = Download::from_table(&config.download_filename, store.monthly_final())?;

        log::info!(
            "dashboard data ready: {} monthly means, {} series rows",
            monthly_means.len(),
            temperature_series.len()
        );
        Ok(DashboardData {
            store,
            config,
            monthly_means,
            temperature_series,
            download,
        })
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn monthly_means(&self) -> &[AggregateRow] {
        &self.monthly_means
    }

    pub fn temperature_series(&self) -> &[EnrichedRow<ObservationRow>] {
        &self.temperature_series
    }

    /// The export payload, serialized once from the table the monthly table slot shows.
    pub fn download(&self) -> &Download {
        &self.download
    }
}
