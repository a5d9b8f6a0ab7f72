//! Response wrapper and time-series analytics
//!
//! [`Response`] owns the decoded payload of one completed request and an
//! ordered record sequence extracted from it. All accessors are pure
//! functions over that immutable snapshot; a `Response` can be shared
//! between readers without locking.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Change metrics between the first and last numeric value of a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Change {
    /// Last value minus first value
    pub absolute: f64,
    /// Percentage change relative to the first value, rounded to 4 decimals.
    /// A zero first value is not guarded against; the division propagates.
    pub percentage: f64,
    /// First numeric value of the column
    pub first_value: f64,
    /// Last numeric value of the column
    pub last_value: f64,
}

/// Change metrics between two consecutive numeric values of a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyChange {
    /// Current value minus previous value
    pub absolute: f64,
    /// Percentage change relative to the previous value, rounded to 4
    /// decimals; 0.0 when the previous value is zero
    pub percentage: f64,
}

/// Trend direction classified from the overall percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Overall change above +1%
    Up,
    /// Overall change below -1%
    Down,
    /// Anything else, including series too short to measure
    Flat,
}

/// Wrapper for a decoded API payload with time-series analytics.
///
/// Construction extracts the record set once; everything else is a pure
/// query over it.
///
/// # Examples
///
/// ```
/// use botstat::Response;
/// use serde_json::json;
///
/// let response = Response::new(json!({
///     "result": {
///         "data": [
///             {"period": "2025-01-01", "value": "33.5"},
///             {"period": "2025-01-02", "value": "33.6"},
///         ]
///     }
/// }));
///
/// assert_eq!(response.count(), 2);
/// assert_eq!(response.average("value"), 33.55);
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    raw: Value,
    data: Vec<Value>,
}

impl Response {
    /// Wrap a decoded payload and extract its record set.
    pub fn new(raw: Value) -> Self {
        let data = extract_data(&raw);
        Self { raw, data }
    }

    /// The raw decoded payload.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Top-level field access on the raw payload, for object-shaped payloads.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// The extracted record set.
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// First record, if any.
    pub fn first(&self) -> Option<&Value> {
        self.data.first()
    }

    /// Last record, if any.
    pub fn last(&self) -> Option<&Value> {
        self.data.last()
    }

    /// Numeric values of a column, in record order.
    ///
    /// Only mapping-shaped records are considered. JSON numbers are taken as
    /// is and JSON strings are parsed; nulls, missing fields, and
    /// non-numeric values are dropped rather than coerced to zero.
    pub fn values_for(&self, column: &str) -> Vec<f64> {
        self.data
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|row| row.get(column))
            .filter_map(numeric)
            .collect()
    }

    /// Minimum value of a column, absent when no numeric values exist.
    pub fn min(&self, column: &str) -> Option<f64> {
        self.values_for(column).into_iter().reduce(f64::min)
    }

    /// Maximum value of a column, absent when no numeric values exist.
    pub fn max(&self, column: &str) -> Option<f64> {
        self.values_for(column).into_iter().reduce(f64::max)
    }

    /// Sum of a column, 0.0 when no numeric values exist.
    pub fn sum(&self, column: &str) -> f64 {
        self.values_for(column).iter().sum()
    }

    /// Arithmetic mean of a column, 0.0 when no numeric values exist.
    pub fn average(&self, column: &str) -> f64 {
        let values = self.values_for(column);
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Alias for [`average`](Self::average).
    pub fn mean(&self, column: &str) -> f64 {
        self.average(column)
    }

    /// Earliest and latest date strings covered by the data.
    ///
    /// Reads each mapping-shaped record's `period` field, falling back to
    /// `date`. Dates are ISO formatted, so the lexicographic extremes equal
    /// the chronological ones.
    pub fn date_range(&self) -> Option<(String, String)> {
        let mut dates = self
            .data
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|row| row.get("period").or_else(|| row.get("date")))
            .filter_map(Value::as_str);

        let first = dates.next()?;
        let (start, end) = dates.fold((first, first), |(min, max), date| {
            (
                if date < min { date } else { min },
                if date > max { date } else { max },
            )
        });
        Some((start.to_string(), end.to_string()))
    }

    /// Inclusive day count of the covered date range.
    ///
    /// 0 when there is no range or either endpoint is not a `YYYY-MM-DD`
    /// date (monthly and quarterly periods fall in this bucket).
    pub fn period_days(&self) -> i64 {
        let Some((start, end)) = self.date_range() else {
            return 0;
        };
        match (parse_date(&start), parse_date(&end)) {
            (Some(start), Some(end)) => (end - start).num_days() + 1,
            _ => 0,
        }
    }

    /// Whether the record count covers every day of the date range.
    pub fn is_complete(&self) -> bool {
        let expected = self.period_days();
        expected == 0 || self.count() as i64 >= expected
    }

    /// Calendar days inside the covered range with no record, ascending.
    ///
    /// Fail-soft: any date-parse failure anywhere in the computation yields
    /// an empty result.
    pub fn missing_dates(&self) -> Vec<NaiveDate> {
        let Some((start, end)) = self.date_range() else {
            return Vec::new();
        };
        let (Some(start), Some(end)) = (parse_date(&start), parse_date(&end)) else {
            return Vec::new();
        };

        let mut actual = HashSet::new();
        for row in self.data.iter().filter_map(Value::as_object) {
            let date = row
                .get("period")
                .or_else(|| row.get("date"))
                .and_then(Value::as_str)
                .and_then(parse_date);
            match date {
                Some(date) => {
                    actual.insert(date);
                }
                None => return Vec::new(),
            }
        }

        let mut missing = Vec::new();
        let mut day = start;
        while day <= end {
            if !actual.contains(&day) {
                missing.push(day);
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        missing
    }

    /// Overall change metrics for a column, absent with fewer than two
    /// numeric values.
    pub fn change(&self, column: &str) -> Option<Change> {
        let values = self.values_for(column);
        if values.len() < 2 {
            return None;
        }
        let first = values[0];
        let last = values[values.len() - 1];
        Some(Change {
            absolute: last - first,
            percentage: round4((last - first) / first * 100.0),
            first_value: first,
            last_value: last,
        })
    }

    /// Change metrics for each consecutive pair of numeric values.
    pub fn daily_changes(&self, column: &str) -> Vec<DailyChange> {
        self.values_for(column)
            .windows(2)
            .map(|pair| {
                let (prev, curr) = (pair[0], pair[1]);
                DailyChange {
                    absolute: curr - prev,
                    percentage: if prev == 0.0 {
                        0.0
                    } else {
                        round4((curr - prev) / prev * 100.0)
                    },
                }
            })
            .collect()
    }

    /// Population standard deviation of the daily percentage changes,
    /// rounded to 4 decimals; 0.0 when there are no changes.
    pub fn volatility(&self, column: &str) -> f64 {
        let changes: Vec<f64> = self
            .daily_changes(column)
            .iter()
            .map(|change| change.percentage)
            .collect();
        if changes.is_empty() {
            return 0.0;
        }
        let mean = changes.iter().sum::<f64>() / changes.len() as f64;
        let variance =
            changes.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / changes.len() as f64;
        round4(variance.sqrt())
    }

    /// Trend direction of a column.
    pub fn trend(&self, column: &str) -> Trend {
        match self.change(column) {
            Some(change) if change.percentage > 1.0 => Trend::Up,
            Some(change) if change.percentage < -1.0 => Trend::Down,
            _ => Trend::Flat,
        }
    }

    /// Render the record set as CSV text.
    ///
    /// The header row is derived from the first record: field names for a
    /// mapping, `column_1..column_N` for a sequence, a single `value` header
    /// for a scalar. Empty data produces a single blank line.
    pub fn to_csv(&self) -> Result<String> {
        if self.data.is_empty() {
            return Ok("\n".to_string());
        }

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        write_record(&mut writer, self.csv_headers())?;
        for row in &self.data {
            write_record(&mut writer, csv_fields(row))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Custom(format!("failed to flush CSV buffer: {e}")))?;
        String::from_utf8(bytes).map_err(|e| Error::Custom(format!("CSV output was not UTF-8: {e}")))
    }

    /// Write the record set as CSV to a file.
    pub fn to_csv_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_csv()?)?;
        Ok(())
    }

    /// Convert the record set to a Polars DataFrame.
    #[cfg(feature = "table")]
    pub fn to_dataframe(&self) -> Result<polars_core::frame::DataFrame> {
        use polars_io::prelude::*;
        use std::io::Cursor;

        let json_bytes = serde_json::to_vec(&self.data)
            .map_err(|e| Error::Custom(format!("failed to serialize data: {e}")))?;
        JsonReader::new(Cursor::new(json_bytes))
            .finish()
            .map_err(|e| Error::Custom(format!("failed to convert data to DataFrame: {e}")))
    }

    fn csv_headers(&self) -> Vec<String> {
        match self.data.first() {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => (1..=items.len()).map(|i| format!("column_{i}")).collect(),
            Some(_) => vec!["value".to_string()],
            None => Vec::new(),
        }
    }
}

/// Extract the record set from a decoded payload.
///
/// Two shapes are recognized: a top-level array is the record set verbatim
/// (flat list payloads such as holiday calendars), and the standard BOT
/// envelope `{"result": {"data": [...]}}`. Anything else yields an empty
/// record set.
fn extract_data(raw: &Value) -> Vec<Value> {
    if let Value::Array(items) = raw {
        return items.clone();
    }

    raw.as_object()
        .and_then(|payload| payload.get("result"))
        .and_then(Value::as_object)
        .and_then(|result| result.get("data"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn csv_fields(row: &Value) -> Vec<String> {
    match row {
        Value::Object(map) => map.values().map(csv_field).collect(),
        Value::Array(items) => items.iter().map(csv_field).collect(),
        other => vec![csv_field(other)],
    }
}

fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

fn write_record(writer: &mut csv::Writer<Vec<u8>>, fields: Vec<String>) -> Result<()> {
    if fields.is_empty() {
        writer.write_record([""])?;
    } else {
        writer.write_record(&fields)?;
    }
    Ok(())
}
