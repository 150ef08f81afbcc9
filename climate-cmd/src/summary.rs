use climate_data::{group_average, sort_by_field, to_table};
use climate_obs::TableRow;
use climate_views::DashboardData;

/// Temperature columns averaged by the summary.
pub const SUMMARY_FIELDS: [&str; 3] = ["avgtemp_c", "maxtemp_c", "mintemp_c"];

/// Average the monthly table by `group_keys` and return it as CSV text.
/// Grouping by `month` keeps calendar order.
pub fn run_summary(data: &DashboardData, group_keys: &[&str]) -> anyhow::Result<String> {
    let rows: Vec<TableRow<'_>> = data.store().monthly_final().iter().collect();
    let mut keys = group_keys.to_vec();
    let by_month = keys.contains(&"month");
    if by_month && !keys.contains(&"month_num") {
        keys.push("month_num");
    }

    let mut means = group_average(&rows, &keys, &SUMMARY_FIELDS)?;
    if by_month {
        sort_by_field(&mut means, "month_num")?;
    }
    let csv = to_table(&means)?.to_csv()?;
    Ok(String::from_utf8(csv)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load::load, tests::fixture_args};
    use climate_data::AggregateError;

    #[test]
    fn one_row_per_city() {
        let data = load(&fixture_args()).unwrap();
        let text = run_summary(&data, &["city"]).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("city,avgtemp_c,maxtemp_c,mintemp_c"));
        let cities: Vec<&str> = lines.map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(cities, vec!["Berlin", "Paris", "Madrid", "Tel Aviv-Yafo"]);
    }

    #[test]
    fn by_month_keeps_calendar_order() {
        let data = load(&fixture_args()).unwrap();
        let text = run_summary(&data, &["month"]).unwrap();
        let months: Vec<&str> = text.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], "Jan");
        assert_eq!(months[11], "Dec");
    }

    #[test]
    fn unknown_column_is_rejected() {
        let data = load(&fixture_args()).unwrap();
        let err = run_summary(&data, &["region"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AggregateError>(),
            Some(AggregateError::InvalidField { .. })
        ));
    }
}
