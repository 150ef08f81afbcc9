//! Generic tables for the pre-computed monthly datasets.
//!
//! Both monthly files are displayed as-is, so they are kept as column lists
//! plus typed cells rather than mapped onto a fixed struct.

use crate::{
    error::{DatasetError, Result},
    record::{Record, Value},
};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fmt;

/// One table cell. Integers and floats are detected on load; everything else is text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Parse a raw CSV field into the narrowest cell type.
    pub fn parse(raw: &str) -> Cell {
        let raw = raw.trim();
        if let Ok(i) = raw.parse::<i64>() {
            Cell::Int(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            Cell::Float(f)
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn as_value(&self) -> Value<'_> {
        match self {
            Cell::Int(i) => Value::Int(*i),
            Cell::Float(f) => Value::Float(*f),
            Cell::Text(s) => Value::Text(s),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(i) => write!(f, "{}", i),
            // integral floats keep their ".0", as they were written on load
            Cell::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// A loaded table: a header row plus rows of cells, all rows the header's width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Parse a CSV string with a header row.
    pub fn from_csv(dataset: &'static str, csv_data: &str) -> Result<Table> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(Cell::parse).collect::<Vec<Cell>>());
        }
        log::info!(
            "loaded table {} ({} columns, {} rows)",
            dataset,
            columns.len(),
            rows.len()
        );
        Ok(Table { columns, rows })
    }

    /// Build a table from parts. Every row must match the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Table> {
        if let Some(pos) = rows.iter().position(|r| r.len() != columns.len()) {
            return Err(DatasetError::Parse {
                dataset: "table",
                line: pos as u64 + 2,
                message: format!("expected {} cells, found {}", columns.len(), rows[pos].len()),
            });
        }
        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate rows as [`TableRow`] views.
    pub fn iter(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(move |cells| TableRow { table: self, cells })
    }

    /// Serialize back to comma-separated text with a header row.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut wtr = WriterBuilder::new().from_writer(Vec::new());
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|c| c.to_string()))?;
        }
        wtr.into_inner()
            .map_err(|e| DatasetError::Io(e.into_error()))
    }
}

/// A borrowed row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    table: &'a Table,
    cells: &'a [Cell],
}

impl<'a> TableRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        self.table.column_index(column).and_then(|i| self.cells.get(i))
    }

    /// (column, cell) pairs in column order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Cell)> + 'a {
        self.table
            .columns
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }
}

impl Record for TableRow<'_> {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        self.get(field).map(Cell::as_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTHLY: &str = "month,month_num,city,avgtemp_c\n\
        Jan,1,Berlin,0.8\n\
        Jan,1,Madrid,6.3\n\
        Feb,2,Berlin,1.9\n";

    #[test]
    fn parses_header_and_typed_cells() {
        let table = Table::from_csv("monthly", MONTHLY).unwrap();
        assert_eq!(table.columns(), &["month", "month_num", "city", "avgtemp_c"]);
        assert_eq!(table.len(), 3);
        let first = table.iter().next().unwrap();
        assert_eq!(first.get("month"), Some(&Cell::Text("Jan".to_string())));
        assert_eq!(first.get("month_num"), Some(&Cell::Int(1)));
        assert_eq!(first.get("avgtemp_c"), Some(&Cell::Float(0.8)));
        assert_eq!(first.get("missing"), None);
    }

    #[test]
    fn rows_act_as_records() {
        let table = Table::from_csv("monthly", MONTHLY).unwrap();
        let row = table.iter().nth(1).unwrap();
        assert_eq!(row.value("city"), Some(Value::Text("Madrid")));
        assert_eq!(row.value("avgtemp_c").and_then(|v| v.as_f64()), Some(6.3));
    }

    #[test]
    fn writes_back_the_same_text() {
        let table = Table::from_csv("monthly", MONTHLY).unwrap();
        let bytes = table.to_csv().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), MONTHLY);
    }

    #[test]
    fn integral_floats_keep_their_decimal_point() {
        let csv = "month,month_num,city,avgtemp_c,maxtemp_c,mintemp_c\n\
            Jan,1,Paris,5.1,9.7,1.0\n\
            Feb,2,Paris,7.4,12.0,-3.0\n";
        let table = Table::from_csv("monthly", csv).unwrap();
        let first = table.iter().next().unwrap();
        assert_eq!(first.get("mintemp_c"), Some(&Cell::Float(1.0)));
        assert_eq!(String::from_utf8(table.to_csv().unwrap()).unwrap(), csv);
    }

    #[test]
    fn quotes_fields_that_need_it() {
        let table = Table::new(
            vec!["city".to_string(), "note".to_string()],
            vec![vec![Cell::Text("Tel Aviv-Yafo".to_string()), Cell::Text("warm, dry".to_string())]],
        )
        .unwrap();
        let text = String::from_utf8(table.to_csv().unwrap()).unwrap();
        assert_eq!(text, "city,note\nTel Aviv-Yafo,\"warm, dry\"\n");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Table::new(vec!["a".to_string()], vec![vec![Cell::Int(1), Cell::Int(2)]]);
        assert!(matches!(err, Err(DatasetError::Parse { .. })));
    }

    #[test]
    fn entries_follow_column_order() {
        let table = Table::from_csv("monthly", MONTHLY).unwrap();
        let row = table.iter().next().unwrap();
        let names: Vec<&str> = row.entries().map(|(c, _)| c).collect();
        assert_eq!(names, vec!["month", "month_num", "city", "avgtemp_c"]);
    }
}
