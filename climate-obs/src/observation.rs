use crate::{
    city::City,
    error::{DatasetError, Result},
    record::{Record, Value},
};
use chrono::NaiveDate;
use climate_utils::dates::month_ordinal;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Field names exposed through [`Record`], in CSV column order.
pub const OBSERVATION_FIELDS: [&str; 8] = [
    "date",
    "city",
    "country",
    "avgtemp_c",
    "maxtemp_c",
    "mintemp_c",
    "month",
    "month_num",
];

/// A single daily observation for one city.
///
/// CSV format (with headers):
/// `date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num`
///
/// ```text
/// date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num
/// 2023-02-14,Berlin,Germany,2.1,7.2,-1.8,Feb,2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    pub date: NaiveDate,
    pub city: City,
    pub country: String,
    /// Average temperature in °C
    pub avgtemp_c: f64,
    /// Maximum temperature in °C
    pub maxtemp_c: f64,
    /// Minimum temperature in °C
    pub mintemp_c: f64,
    /// Month label, "Jan".."Dec"
    pub month: String,
    /// Month ordinal, 1..=12
    pub month_num: u32,
}

impl ObservationRow {
    /// Parse observation rows from a CSV string with headers.
    ///
    /// `dataset` names the source in error messages. Rows whose month label
    /// disagrees with their month ordinal are rejected.
    pub fn parse_csv(dataset: &'static str, csv_data: &str) -> Result<Vec<ObservationRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut rows = Vec::new();
        for result in rdr.deserialize::<ObservationRow>() {
            let row = result?;
            if month_ordinal(&row.month) != Some(row.month_num) {
                return Err(DatasetError::Parse {
                    dataset,
                    // header is line 1
                    line: rows.len() as u64 + 2,
                    message: format!(
                        "month label {:?} does not match month_num {}",
                        row.month, row.month_num
                    ),
                });
            }
            rows.push(row);
        }
        log::info!("loaded {} observations from {}", rows.len(), dataset);
        Ok(rows)
    }
}

impl Record for ObservationRow {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        let value = match field {
            "date" => Value::Date(self.date),
            "city" => Value::Text(self.city.name()),
            "country" => Value::Text(&self.country),
            "avgtemp_c" => Value::Float(self.avgtemp_c),
            "maxtemp_c" => Value::Float(self.maxtemp_c),
            "mintemp_c" => Value::Float(self.mintemp_c),
            "month" => Value::Text(&self.month),
            "month_num" => Value::Int(i64::from(self.month_num)),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n\
        2023-02-14,Berlin,Germany,2.1,7.2,-1.8,Feb,2\n\
        2023-02-14,Tel Aviv-Yafo,Israel,15.0,20.1,11.1,Feb,2\n";

    #[test]
    fn parses_rows_with_headers() {
        let rows = ObservationRow::parse_csv("sample", SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, City::Berlin);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2023, 2, 14).unwrap());
        assert_eq!(rows[1].city, City::TelAviv);
        assert_eq!(rows[1].maxtemp_c, 20.1);
    }

    #[test]
    fn rejects_inconsistent_month() {
        let csv = "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n\
            2023-02-14,Paris,France,6.0,9.0,2.0,Mar,2\n";
        let err = ObservationRow::parse_csv("sample", csv).unwrap_err();
        match err {
            DatasetError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_city() {
        let csv = "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n\
            2023-02-14,Nowhere,Atlantis,6.0,9.0,2.0,Feb,2\n";
        assert!(matches!(
            ObservationRow::parse_csv("sample", csv),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn exposes_every_field_by_name() {
        let rows = ObservationRow::parse_csv("sample", SAMPLE).unwrap();
        let row = &rows[0];
        for field in OBSERVATION_FIELDS {
            assert!(row.value(field).is_some(), "missing field {field}");
        }
        assert_eq!(row.value("city"), Some(Value::Text("Berlin")));
        assert_eq!(row.value("month_num"), Some(Value::Int(2)));
        assert_eq!(row.value("humidity"), None);
    }
}
