//! Group-and-average.
//!
//! `group_average` is the pandas-style `groupby(keys)[fields].mean().round(2)`:
//! one output row per distinct key combination, in order of first appearance.

use crate::error::{AggregateError, Result};
use chrono::NaiveDate;
use climate_obs::{Cell, Record, Table, Value};
use climate_utils::numbers::{mean, round2};
use std::{collections::HashMap, fmt};

/// An owned grouping-key value. Floats are not groupable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

impl Key {
    pub(crate) fn from_value(field: &str, value: Value<'_>) -> Result<Key> {
        match value {
            Value::Text(s) => Ok(Key::Text(s.to_string())),
            Value::Int(i) => Ok(Key::Int(i)),
            Value::Date(d) => Ok(Key::Date(d)),
            Value::Float(_) => Err(AggregateError::invalid(
                field,
                "floating-point fields cannot be grouping keys",
            )),
        }
    }

    pub fn as_value(&self) -> Value<'_> {
        match self {
            Key::Text(s) => Value::Text(s),
            Key::Int(i) => Value::Int(*i),
            Key::Date(d) => Value::Date(*d),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_value(), f)
    }
}

/// Extract the key tuple of `row` for `group_keys`.
pub(crate) fn key_of<R: Record>(row: &R, group_keys: &[&str]) -> Result<Vec<Key>> {
    group_keys
        .iter()
        .map(|field| {
            let value = row
                .value(field)
                .ok_or_else(|| AggregateError::invalid(field, "not present on every row"))?;
            Key::from_value(field, value)
        })
        .collect()
}

/// Render a key tuple as `field=value, ...` for error messages.
pub(crate) fn describe_key(group_keys: &[&str], key: &[Key]) -> String {
    group_keys
        .iter()
        .zip(key)
        .map(|(field, value)| format!("{}={}", field, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One derived row: its grouping keys and the rounded means of its value fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    keys: Vec<(String, Key)>,
    means: Vec<(String, f64)>,
}

impl AggregateRow {
    pub fn key(&self, field: &str) -> Option<&Key> {
        self.keys.iter().find(|(f, _)| f == field).map(|(_, k)| k)
    }

    pub fn mean(&self, field: &str) -> Option<f64> {
        self.means.iter().find(|(f, _)| f == field).map(|(_, m)| *m)
    }

    pub fn keys(&self) -> &[(String, Key)] {
        &self.keys
    }

    pub fn means(&self) -> &[(String, f64)] {
        &self.means
    }
}

impl Record for AggregateRow {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        self.key(field)
            .map(Key::as_value)
            .or_else(|| self.mean(field).map(Value::Float))
    }
}

/// Group `rows` by `group_keys` and average each of `value_fields` per group,
/// rounded to 2 decimals.
///
/// Output order is the order in which each key combination first appears.
///
/// # Errors
///
/// - [`AggregateError::EmptyInput`] when `rows` is empty
/// - [`AggregateError::InvalidField`] when a field is missing from a row, a
///   value field is not numeric, a grouping key is a float, or either field
///   list is empty
pub fn group_average<R: Record>(
    rows: &[R],
    group_keys: &[&str],
    value_fields: &[&str],
) -> Result<Vec<AggregateRow>> {
    if rows.is_empty() {
        return Err(AggregateError::EmptyInput);
    }
    if group_keys.is_empty() {
        return Err(AggregateError::invalid("", "at least one grouping key is required"));
    }
    if value_fields.is_empty() {
        return Err(AggregateError::invalid("", "at least one value field is required"));
    }

    let mut index: HashMap<Vec<Key>, usize> = HashMap::new();
    // (key tuple, samples per value field)
    let mut groups: Vec<(Vec<Key>, Vec<Vec<f64>>)> = Vec::new();

    for row in rows {
        let key = key_of(row, group_keys)?;
        let samples = value_fields
            .iter()
            .map(|field| {
                row.value(field)
                    .ok_or_else(|| AggregateError::invalid(field, "not present on every row"))?
                    .as_f64()
                    .ok_or_else(|| AggregateError::invalid(field, "value fields must be numeric"))
            })
            .collect::<Result<Vec<f64>>>()?;

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, vec![Vec::new(); value_fields.len()]));
            groups.len() - 1
        });
        for (acc, sample) in groups[slot].1.iter_mut().zip(samples) {
            acc.push(sample);
        }
    }

    let aggregates = groups
        .into_iter()
        .map(|(key, samples)| {
            let keys = group_keys
                .iter()
                .map(|f| f.to_string())
                .zip(key)
                .collect();
            let means = value_fields
                .iter()
                .zip(samples)
                .map(|(field, values)| {
                    let m = mean(&values).ok_or(AggregateError::EmptyInput)?;
                    Ok((field.to_string(), round2(m)))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(AggregateRow { keys, means })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "group_average by {:?} over {:?}: {} rows -> {} groups",
        group_keys,
        value_fields,
        rows.len(),
        aggregates.len()
    );
    Ok(aggregates)
}

/// Stable sort of aggregate rows by a key or mean field, ascending.
pub fn sort_by_field(rows: &mut [AggregateRow], field: &str) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    if first.key(field).is_some() {
        rows.sort_by(|a, b| a.key(field).cmp(&b.key(field)));
    } else if first.mean(field).is_some() {
        rows.sort_by(|a, b| {
            let x = a.mean(field).unwrap_or(f64::NAN);
            let y = b.mean(field).unwrap_or(f64::NAN);
            x.total_cmp(&y)
        });
    } else {
        return Err(AggregateError::invalid(field, "not a key or mean of the aggregate"));
    }
    Ok(())
}

/// Flatten aggregate rows into a [`Table`]: key columns first, then means.
pub fn to_table(rows: &[AggregateRow]) -> climate_obs::error::Result<Table> {
    let columns = rows
        .first()
        .map(|r| {
            r.keys
                .iter()
                .map(|(f, _)| f.clone())
                .chain(r.means.iter().map(|(f, _)| f.clone()))
                .collect()
        })
        .unwrap_or_default();
    let cells = rows
        .iter()
        .map(|r| {
            r.keys
                .iter()
                .map(|(_, k)| match k {
                    Key::Text(s) => Cell::Text(s.clone()),
                    Key::Int(i) => Cell::Int(*i),
                    Key::Date(d) => Cell::Text(climate_utils::dates::format_date(d)),
                })
                .chain(r.means.iter().map(|(_, m)| Cell::Float(*m)))
                .collect()
        })
        .collect();
    Table::new(columns, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::obs;
    use climate_obs::{City, ObservationRow};

    fn three_groups() -> Vec<ObservationRow> {
        vec![
            obs(City::Berlin, 1, 2.0, 5.0, -1.0),
            obs(City::Madrid, 1, 6.0, 11.0, 1.0),
            obs(City::Berlin, 1, 4.0, 7.0, 0.0),
            obs(City::Berlin, 2, 3.0, 8.0, -2.0),
            obs(City::Madrid, 1, 8.0, 12.0, 3.0),
            obs(City::Berlin, 1, 6.0, 9.0, 2.0),
        ]
    }

    #[test]
    fn berlin_january_mean_is_four() {
        let rows = vec![
            obs(City::Berlin, 1, 2.0, 0.0, 0.0),
            obs(City::Berlin, 1, 4.0, 0.0, 0.0),
            obs(City::Berlin, 1, 6.0, 0.0, 0.0),
        ];
        let out = group_average(&rows, &["month", "city"], &["avgtemp_c"]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key("month"), Some(&Key::Text("Jan".to_string())));
        assert_eq!(out[0].key("city"), Some(&Key::Text("Berlin".to_string())));
        assert_eq!(out[0].mean("avgtemp_c"), Some(4.0));
    }

    #[test]
    fn one_row_per_group_with_hand_computed_means() {
        let out =
            group_average(&three_groups(), &["month", "city"], &["avgtemp_c", "maxtemp_c"]).unwrap();
        assert_eq!(out.len(), 3);

        // first-appearance order: (Jan, Berlin), (Jan, Madrid), (Feb, Berlin)
        assert_eq!(out[0].key("city"), Some(&Key::Text("Berlin".to_string())));
        assert_eq!(out[0].mean("avgtemp_c"), Some(4.0));
        assert_eq!(out[0].mean("maxtemp_c"), Some(7.0));

        assert_eq!(out[1].key("city"), Some(&Key::Text("Madrid".to_string())));
        assert_eq!(out[1].mean("avgtemp_c"), Some(7.0));
        assert_eq!(out[1].mean("maxtemp_c"), Some(11.5));

        assert_eq!(out[2].key("month"), Some(&Key::Text("Feb".to_string())));
        assert_eq!(out[2].mean("avgtemp_c"), Some(3.0));
    }

    #[test]
    fn means_are_rounded_to_two_decimals() {
        let rows = vec![
            obs(City::Paris, 3, 1.0, 0.0, 0.0),
            obs(City::Paris, 3, 2.0, 0.0, 0.0),
            obs(City::Paris, 3, 2.0, 0.0, 0.0),
        ];
        let out = group_average(&rows, &["city"], &["avgtemp_c"]).unwrap();
        assert_eq!(out[0].mean("avgtemp_c"), Some(1.67));
    }

    #[test]
    fn exact_half_means_round_to_even() {
        let rows = vec![
            obs(City::Berlin, 1, 0.12, 0.0, 0.0),
            obs(City::Berlin, 1, 0.13, 0.0, 0.0),
        ];
        let out = group_average(&rows, &["city"], &["avgtemp_c"]).unwrap();
        assert_eq!(out[0].mean("avgtemp_c"), Some(0.12));
    }

    #[test]
    fn integer_keys_group_and_sort() {
        let mut out = group_average(
            &[
                obs(City::Paris, 3, 1.0, 0.0, 0.0),
                obs(City::Paris, 1, 2.0, 0.0, 0.0),
                obs(City::Paris, 2, 3.0, 0.0, 0.0),
            ],
            &["month", "month_num"],
            &["avgtemp_c"],
        )
        .unwrap();
        sort_by_field(&mut out, "month_num").unwrap();
        let months: Vec<_> = out.iter().map(|r| r.key("month_num").cloned()).collect();
        assert_eq!(months, vec![Some(Key::Int(1)), Some(Key::Int(2)), Some(Key::Int(3))]);
    }

    #[test]
    fn sort_is_stable_and_accepts_means() {
        let mut out =
            group_average(&three_groups(), &["month", "city"], &["avgtemp_c"]).unwrap();
        sort_by_field(&mut out, "avgtemp_c").unwrap();
        let means: Vec<_> = out.iter().map(|r| r.mean("avgtemp_c").unwrap()).collect();
        assert_eq!(means, vec![3.0, 4.0, 7.0]);
        assert!(matches!(
            sort_by_field(&mut out, "humidity"),
            Err(AggregateError::InvalidField { .. })
        ));
    }

    #[test]
    fn empty_input_fails() {
        let rows: Vec<ObservationRow> = Vec::new();
        assert_eq!(
            group_average(&rows, &["city"], &["avgtemp_c"]),
            Err(AggregateError::EmptyInput)
        );
    }

    #[test]
    fn unknown_fields_fail() {
        let rows = three_groups();
        let err = group_average(&rows, &["region"], &["avgtemp_c"]).unwrap_err();
        assert!(matches!(err, AggregateError::InvalidField { ref field, .. } if field == "region"));
        let err = group_average(&rows, &["city"], &["humidity"]).unwrap_err();
        assert!(matches!(err, AggregateError::InvalidField { ref field, .. } if field == "humidity"));
    }

    #[test]
    fn text_value_fields_and_float_keys_fail() {
        let rows = three_groups();
        assert!(matches!(
            group_average(&rows, &["city"], &["country"]),
            Err(AggregateError::InvalidField { .. })
        ));
        assert!(matches!(
            group_average(&rows, &["avgtemp_c"], &["maxtemp_c"]),
            Err(AggregateError::InvalidField { .. })
        ));
    }

    #[test]
    fn flattens_to_a_table() {
        let out = group_average(&three_groups(), &["month", "city"], &["avgtemp_c"]).unwrap();
        let table = to_table(&out).unwrap();
        assert_eq!(table.columns(), &["month", "city", "avgtemp_c"]);
        assert_eq!(table.len(), 3);
        let text = String::from_utf8(table.to_csv().unwrap()).unwrap();
        assert_eq!(
            text,
            "month,city,avgtemp_c\nJan,Berlin,4.0\nJan,Madrid,7.0\nFeb,Berlin,3.0\n"
        );
    }
}
