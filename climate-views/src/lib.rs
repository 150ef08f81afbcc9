//! View builders for the city climate dashboard.
//!
//! Every builder is a plain function of the loaded [`DashboardData`] and, for
//! the filtered charts, one selector value. Builders never read global state
//! and never fail on a bad selector value: an unknown city renders an empty
//! chart instead.

pub mod builders;
pub mod config;
pub mod data;
pub mod download;
pub mod filter;
pub mod spec;

pub use config::DashboardConfig;
pub use data::{BuildError, DashboardData};
pub use download::Download;
pub use filter::FilterError;
pub use spec::{ChartKind, ChartSpec, Point, Series, TableSpec, View};
