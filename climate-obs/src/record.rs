//! Named-field access to rows.
//!
//! The aggregation functions group and average rows by field *name*, so every
//! row type the dashboard aggregates implements [`Record`]. A field that a row
//! does not carry resolves to `None`, which is how callers detect a field that
//! is absent from the input schema.

use chrono::NaiveDate;
use std::fmt;

/// A borrowed field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
}

impl Value<'_> {
    /// Numeric view of the value; text and dates are not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) | Value::Date(_) => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Date(d) => write!(f, "{}", climate_utils::dates::format_date(d)),
        }
    }
}

/// A row whose fields can be looked up by name.
pub trait Record {
    /// Value of `field`, or `None` when the row has no such field.
    fn value(&self, field: &str) -> Option<Value<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        (**self).value(field)
    }
}
