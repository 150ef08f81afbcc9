//! Shared utility functions for the climate dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used by the climate CSV files: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Three-letter month labels, January first.
    pub const MONTH_LABELS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Month label ("Jan".."Dec") for a 1-based month ordinal.
    pub fn month_label(ordinal: u32) -> Option<&'static str> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;
        MONTH_LABELS.get(index).copied()
    }

    /// 1-based month ordinal for a three-letter label. Case-insensitive.
    pub fn month_ordinal(label: &str) -> Option<u32> {
        MONTH_LABELS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(label.trim()))
            .map(|i| i as u32 + 1)
    }

}

/// Numeric helpers
pub mod numbers {
    /// Round to 2 decimal places. Exact halves go to the even neighbour,
    /// so `0.125` becomes `0.12` and `0.375` becomes `0.38`.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round_ties_even() / 100.0
    }

    /// Arithmetic mean of a slice, `None` when empty.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

}
