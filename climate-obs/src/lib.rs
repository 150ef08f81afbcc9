//! Core types for the city climate dashboard.
//!
//! - `city`: the four known cities, their countries and palette colors
//! - `record`: named-field access used by the aggregation functions
//! - `observation`: one loaded observation row
//! - `table`: generic pre-computed tables (monthly averages, exports)
//! - `store`: the immutable [`DatasetStore`] built once at startup

pub mod city;
pub mod error;
pub mod observation;
pub mod record;
pub mod store;
pub mod table;

pub use city::City;
pub use error::{DatasetError, UnknownCity};
pub use observation::ObservationRow;
pub use record::{Record, Value};
pub use store::DatasetStore;
pub use table::{Cell, Table, TableRow};
