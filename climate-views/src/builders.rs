//! One function per dashboard view.
//!
//! Static views take only the data; filtered views also take the raw selector
//! value. An unknown value is logged and rendered as a chart with no series.

use crate::{
    data::DashboardData,
    filter::parse_city,
    spec::{ChartKind, ChartSpec, Point, Series, TableSpec},
};
use climate_data::Key;
use climate_obs::{City, Record};

const MONTH_AXIS: &str = "Month";
const AVG_TEMP_AXIS: &str = "Average Temperature (°C)";
const MIN_TEMP_AXIS: &str = "Average Minimum Temperature (°C)";

/// Choropleth of average temperature per country on the configured snapshot date.
pub fn world_map(data: &DashboardData) -> ChartSpec {
    let date = data.config().snapshot_date;
    let points: Vec<Point> = data
        .store()
        .climate()
        .iter()
        .filter(|row| row.date == date)
        .map(|row| Point {
            x: row.country.clone(),
            y: row.avgtemp_c,
        })
        .collect();

    let mut chart = ChartSpec::new(
        ChartKind::Choropleth {
            color_scale: "Reds".to_string(),
        },
        format!("Average Temperature on {}", date),
        "Country",
        AVG_TEMP_AXIS,
    );
    if !points.is_empty() {
        chart.series.push(Series {
            name: "avgtemp_c".to_string(),
            color: "#de2d26".to_string(),
            points,
        });
    }
    chart
}

/// Average maximum temperature per month, one line per city.
pub fn max_temp_lines(data: &DashboardData) -> ChartSpec {
    ChartSpec::new(
        ChartKind::Line { markers: true },
        "Average Maximum Temperature",
        MONTH_AXIS,
        AVG_TEMP_AXIS,
    )
    .with_city_series(line_points(data, None, "avg_maxtemp_c"))
}

/// Monthly mean temperature of one city as grouped bars.
pub fn monthly_bar_chart(data: &DashboardData, city: &str) -> ChartSpec {
    let chart = ChartSpec::new(
        ChartKind::GroupedBar,
        format!("Average Temperature in 2023 - {}", city),
        MONTH_AXIS,
        AVG_TEMP_AXIS,
    );
    let Some(city) = known_city(city) else {
        return chart;
    };
    let name = Key::Text(city.name().to_string());
    chart.with_city_series(
        data.monthly_means()
            .iter()
            .filter(|row| row.key("city") == Some(&name))
            .filter_map(|row| {
                Some((
                    city,
                    Point {
                        x: row.key("month")?.to_string(),
                        y: row.mean("avgtemp_c")?,
                    },
                ))
            }),
    )
}

/// Average minimum temperature per month for one city.
pub fn min_temp_line(data: &DashboardData, city: &str) -> ChartSpec {
    let chart = ChartSpec::new(
        ChartKind::Line { markers: false },
        format!("Average Minimum Temperature - {}", city),
        MONTH_AXIS,
        MIN_TEMP_AXIS,
    );
    match known_city(city) {
        Some(city) => chart.with_city_series(line_points(data, Some(city), "avg_mintemp_c")),
        None => chart,
    }
}

/// The monthly aggregate table, the same table the download serializes.
pub fn monthly_table(data: &DashboardData) -> TableSpec {
    let table = data.store().monthly_final();
    TableSpec::from_rows(
        "Average temperature in 2023 per month and city",
        table.columns(),
        table.iter(),
    )
}

/// Month by city comparison of average temperatures.
pub fn city_comparison_table(data: &DashboardData) -> TableSpec {
    let table = data.store().monthly_avg();
    TableSpec::from_rows("Monthly averages side by side", table.columns(), table.iter())
}

fn known_city(value: &str) -> Option<City> {
    match parse_city(value) {
        Ok(city) => Some(city),
        Err(err) => {
            log::warn!("{}; rendering an empty chart", err);
            None
        }
    }
}

/// Per-observation (city, month, group mean) points, optionally for one city.
fn line_points<'a>(
    data: &'a DashboardData,
    only: Option<City>,
    field: &'a str,
) -> impl Iterator<Item = (City, Point)> + 'a {
    data.temperature_series()
        .iter()
        .filter(move |row| only.map_or(true, |city| row.row().city == city))
        .filter_map(move |row| {
            let y = row.value(field)?.as_f64()?;
            Some((
                row.row().city,
                Point {
                    x: row.row().month.clone(),
                    y,
                },
            ))
        })
}
