//! Renderable view specifications.
//!
//! All structs derive `Serialize` so the web shell can hand them to D3.js as
//! JSON without further translation.

use climate_obs::{Cell, City, TableRow};
use serde::Serialize;
use std::collections::BTreeMap;

/// How a chart is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    /// One bar per (x, series), bars of a category side by side
    GroupedBar,
    Line { markers: bool },
    /// Countries colored by value on a sequential scale
    Choropleth { color_scale: String },
}

/// A single (x, y) data point. `x` is a category such as a month label or a country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

/// One colored series, usually one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub points: Vec<Point>,
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// A chart with labels and no series yet.
    pub fn new(kind: ChartKind, title: impl Into<String>, x_label: &str, y_label: &str) -> Self {
        ChartSpec {
            kind,
            title: title.into(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
        }
    }

    /// Group (city, point) pairs into one series per city, in first-appearance order.
    pub fn with_city_series(mut self, points: impl IntoIterator<Item = (City, Point)>) -> Self {
        for (city, point) in points {
            match self.series.iter_mut().find(|s| s.name == city.name()) {
                Some(series) => series.points.push(point),
                None => self.series.push(Series {
                    name: city.name().to_string(),
                    color: city.color().to_string(),
                    points: vec![point],
                }),
            }
        }
        self
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// A table: ordered column list plus one column->cell mapping per row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, Cell>>,
}

impl TableSpec {
    pub fn from_rows<'a>(
        title: impl Into<String>,
        columns: &[String],
        rows: impl IntoIterator<Item = TableRow<'a>>,
    ) -> Self {
        TableSpec {
            title: title.into(),
            columns: columns.to_vec(),
            rows: rows
                .into_iter()
                .map(|row| {
                    row.entries()
                        .map(|(column, cell)| (column.to_string(), cell.clone()))
                        .collect()
                })
                .collect(),
        }
    }
}

/// The content of one output slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "spec", rename_all = "snake_case")]
pub enum View {
    Chart(ChartSpec),
    Table(TableSpec),
}

impl View {
    pub fn as_chart(&self) -> Option<&ChartSpec> {
        match self {
            View::Chart(chart) => Some(chart),
            View::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableSpec> {
        match self {
            View::Table(table) => Some(table),
            View::Chart(_) => None,
        }
    }

    /// JSON for the D3 renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: &str, y: f64) -> Point {
        Point { x: x.to_string(), y }
    }

    #[test]
    fn city_series_group_in_first_appearance_order() {
        let chart = ChartSpec::new(ChartKind::GroupedBar, "t", "Month", "°C").with_city_series([
            (City::Madrid, point("Jan", 6.3)),
            (City::Berlin, point("Jan", 0.8)),
            (City::Madrid, point("Feb", 7.9)),
        ]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Madrid");
        assert_eq!(chart.series[0].color, "#ffb347");
        assert_eq!(chart.series[0].points.len(), 2);
        assert_eq!(chart.series[1].name, "Berlin");
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn chart_json_shape() {
        let view = View::Chart(
            ChartSpec::new(ChartKind::Line { markers: true }, "Max", "Month", "°C")
                .with_city_series([(City::Paris, point("Jan", 9.7))]),
        );
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(json["view"], "chart");
        assert_eq!(json["spec"]["kind"]["type"], "line");
        assert_eq!(json["spec"]["kind"]["markers"], true);
        assert_eq!(json["spec"]["xLabel"], "Month");
        assert_eq!(json["spec"]["series"][0]["points"][0]["y"], 9.7);
    }

    #[test]
    fn table_rows_map_columns_to_cells() {
        let table = climate_obs::Table::from_csv("t", "month,Berlin\nJan,0.8\n").unwrap();
        let spec = TableSpec::from_rows("Monthly", table.columns(), table.iter());
        assert_eq!(spec.columns, vec!["month", "Berlin"]);
        assert_eq!(spec.rows[0]["Berlin"], Cell::Float(0.8));
        let view = View::Table(spec);
        assert!(view.as_chart().is_none());
        assert_eq!(view.as_table().map(|t| t.rows.len()), Some(1));
    }
}
