//! Join-back enrichment.
//!
//! `enrich_with_group_means` left-joins each row with the aggregate of its
//! group, keeping one output row per input row. It is how the line charts get
//! per-point series annotated with the monthly average.

use crate::{
    aggregate::{describe_key, key_of, AggregateRow, Key},
    error::{AggregateError, Result},
};
use climate_obs::{Record, Value};
use std::collections::HashMap;

/// Prefix under which an enriched row exposes its group means.
pub const GROUP_MEAN_PREFIX: &str = "avg_";

/// An original row plus the means of its group.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow<R> {
    row: R,
    group: AggregateRow,
}

impl<R> EnrichedRow<R> {
    pub fn row(&self) -> &R {
        &self.row
    }

    /// Group mean of `field`, e.g. `group_mean("maxtemp_c")`.
    pub fn group_mean(&self, field: &str) -> Option<f64> {
        self.group.mean(field)
    }
}

/// Own fields first; `avg_<field>` resolves to the group mean of `<field>`.
impl<R: Record> Record for EnrichedRow<R> {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        self.row.value(field).or_else(|| {
            field
                .strip_prefix(GROUP_MEAN_PREFIX)
                .and_then(|f| self.group.mean(f))
                .map(Value::Float)
        })
    }
}

/// Left-join every row with its group's aggregate from `means`.
///
/// # Errors
///
/// - [`AggregateError::EmptyInput`] when `rows` is empty
/// - [`AggregateError::InvalidField`] when a row or an aggregate lacks a key field
/// - [`AggregateError::JoinKeyMismatch`] when a row's group has no aggregate
pub fn enrich_with_group_means<R: Record + Clone>(
    rows: &[R],
    group_keys: &[&str],
    means: &[AggregateRow],
) -> Result<Vec<EnrichedRow<R>>> {
    if rows.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    let mut lookup: HashMap<Vec<Key>, &AggregateRow> = HashMap::with_capacity(means.len());
    for aggregate in means {
        let key = group_keys
            .iter()
            .map(|field| {
                aggregate
                    .key(field)
                    .cloned()
                    .ok_or_else(|| AggregateError::invalid(field, "not a key of the aggregate"))
            })
            .collect::<Result<Vec<Key>>>()?;
        lookup.insert(key, aggregate);
    }

    let enriched = rows
        .iter()
        .map(|row| {
            let key = key_of(row, group_keys)?;
            let group = lookup
                .get(&key)
                .ok_or_else(|| AggregateError::JoinKeyMismatch {
                    key: describe_key(group_keys, &key),
                })?;
            Ok(EnrichedRow {
                row: row.clone(),
                group: (*group).clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("enriched {} rows with {} group means", enriched.len(), means.len());
    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aggregate::group_average, fixtures::obs};
    use climate_obs::{City, ObservationRow};

    fn rows() -> Vec<ObservationRow> {
        vec![
            obs(City::Berlin, 1, 2.0, 5.0, -3.0),
            obs(City::Berlin, 1, 4.0, 7.0, -1.0),
            obs(City::Paris, 1, 6.0, 9.0, 2.0),
            obs(City::Berlin, 2, 3.0, 6.0, -2.0),
            obs(City::Paris, 1, 7.0, 10.0, 3.0),
        ]
    }

    #[test]
    fn one_output_row_per_input_row() {
        let rows = rows();
        let means = group_average(&rows, &["month", "city"], &["maxtemp_c", "mintemp_c"]).unwrap();
        assert_eq!(means.len(), 3);
        let enriched = enrich_with_group_means(&rows, &["month", "city"], &means).unwrap();
        assert_eq!(enriched.len(), rows.len());
        for (out, input) in enriched.iter().zip(&rows) {
            assert_eq!(out.row(), input);
        }
    }

    #[test]
    fn annotated_mean_matches_group_average() {
        let rows = rows();
        let keys = ["month", "city"];
        let means = group_average(&rows, &keys, &["maxtemp_c"]).unwrap();
        let enriched = enrich_with_group_means(&rows, &keys, &means).unwrap();

        for out in &enriched {
            let own_group: Vec<ObservationRow> = rows
                .iter()
                .filter(|r| r.month == out.row().month && r.city == out.row().city)
                .cloned()
                .collect();
            let expected = group_average(&own_group, &keys, &["maxtemp_c"]).unwrap();
            assert_eq!(out.group_mean("maxtemp_c"), expected[0].mean("maxtemp_c"));
        }
        assert_eq!(enriched[0].group_mean("maxtemp_c"), Some(6.0));
        assert_eq!(enriched[2].group_mean("maxtemp_c"), Some(9.5));
    }

    #[test]
    fn group_means_are_addressable_with_prefix() {
        let rows = rows();
        let means = group_average(&rows, &["month", "city"], &["mintemp_c"]).unwrap();
        let enriched = enrich_with_group_means(&rows, &["month", "city"], &means).unwrap();
        assert_eq!(enriched[0].value("avg_mintemp_c"), Some(Value::Float(-2.0)));
        assert_eq!(enriched[0].value("mintemp_c"), Some(Value::Float(-3.0)));
        assert_eq!(enriched[0].value("avg_maxtemp_c"), None);
    }

    #[test]
    fn missing_group_is_a_join_mismatch() {
        let rows = rows();
        let only_january: Vec<ObservationRow> =
            rows.iter().filter(|r| r.month_num == 1).cloned().collect();
        let means = group_average(&only_january, &["month", "city"], &["maxtemp_c"]).unwrap();
        let err = enrich_with_group_means(&rows, &["month", "city"], &means).unwrap_err();
        assert_eq!(
            err,
            AggregateError::JoinKeyMismatch {
                key: "month=Feb, city=Berlin".to_string()
            }
        );
    }

    #[test]
    fn means_without_the_join_key_are_invalid() {
        let rows = rows();
        let means = group_average(&rows, &["city"], &["maxtemp_c"]).unwrap();
        let err = enrich_with_group_means(&rows, &["month", "city"], &means).unwrap_err();
        assert!(matches!(err, AggregateError::InvalidField { ref field, .. } if field == "month"));
    }

    #[test]
    fn empty_rows_fail() {
        let rows: Vec<ObservationRow> = Vec::new();
        assert_eq!(
            enrich_with_group_means(&rows, &["city"], &[]),
            Err(AggregateError::EmptyInput)
        );
    }
}
