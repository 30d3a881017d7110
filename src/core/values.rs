use serde::Deserialize;
use serde_json::{Map, Value};

use super::constants::REQUIRED_MEASURES;
use super::error::GaugeError;

/// One result row, keyed by field name. Each cell is an object with a `value`.
pub type Row = Map<String, Value>;

/// A result column. Only the name is needed to look up cells.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Field {
    pub name: String,
}

/// The measure columns of the host's query response, in query order. Other
/// keys are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryFields {
    pub measures: Vec<Field>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeValues {
    pub nominator: f64,
    pub denominator: f64,
    pub percentage: f64,
}

impl GaugeValues {
    pub fn new(nominator: f64, denominator: f64) -> Self {
        Self {
            nominator,
            denominator,
            percentage: percentage(nominator, denominator),
        }
    }

    /// Read the first two measures of the first row.
    ///
    /// Fails before anything else is looked at when the query has fewer than
    /// two measures. Extra measures are ignored.
    pub fn from_query(rows: &[Row], fields: &QueryFields) -> Result<Self, GaugeError> {
        if fields.measures.len() < REQUIRED_MEASURES {
            return Err(GaugeError::InsufficientMeasures {
                found: fields.measures.len(),
            });
        }
        let first_row = rows.first().ok_or(GaugeError::NoResults)?;
        let nominator = measure_value(first_row, &fields.measures[0].name)?;
        let denominator = measure_value(first_row, &fields.measures[1].name)?;
        Ok(Self::new(nominator, denominator))
    }
}

/// `nominator / denominator` as a percentage; a zero denominator reads as 0%.
/// Not clamped.
#[inline]
pub fn percentage(nominator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        nominator / denominator * 100.0
    }
}

fn measure_value(row: &Row, field: &str) -> Result<f64, GaugeError> {
    let cell = row.get(field).ok_or_else(|| GaugeError::MissingMeasure {
        field: field.to_string(),
    })?;
    let value = match cell {
        Value::Object(cell) => cell.get("value").unwrap_or(&Value::Null),
        bare => bare,
    };
    numeric(value).ok_or_else(|| GaugeError::NonNumeric {
        field: field.to_string(),
    })
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        // Empty cells read as zero, matching arithmetic on the host side.
        Value::Null => Some(0.0),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
