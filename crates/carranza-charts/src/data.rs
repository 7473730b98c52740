//! Typed input contracts for the chart components.
//!
//! Callers build these from whatever aggregate rows the backend returns and
//! hand them down as props. Magnitudes are validated once at construction;
//! past that point the charts treat the data as trusted and never error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected magnitude at a construction boundary.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartDataError {
    #[error("negative value {value} for \"{label}\"")]
    Negative { label: String, value: f64 },

    #[error("non-finite value for \"{label}\"")]
    NonFinite { label: String },
}

fn checked_value(label: &str, value: f64) -> Result<f64, ChartDataError> {
    if !value.is_finite() {
        return Err(ChartDataError::NonFinite {
            label: label.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ChartDataError::Negative {
            label: label.to_string(),
            value,
        });
    }
    Ok(value)
}

/// One named magnitude of a proportion chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    name: String,
    value: f64,
}

impl Slice {
    /// Build a slice, rejecting negative and non-finite magnitudes.
    pub fn new(name: impl Into<String>, value: f64) -> Result<Self, ChartDataError> {
        let name = name.into();
        let value = checked_value(&name, value)?;
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// One named bucket (e.g. a month) holding several named sub-values that sum
/// into a stacked bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackedRecord {
    name: String,
    values: HashMap<String, f64>,
}

impl StackedRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style insert, with the same magnitude validation as
    /// [`Slice::new`].
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Result<Self, ChartDataError> {
        let key = key.into();
        let value = checked_value(&key, value)?;
        self.values.insert(key, value);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Magnitude for a series key. Keys this record never saw read as 0.0;
    /// a key set referencing an absent field is not an error.
    pub fn value_for(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Sum over the caller-supplied key set.
    pub fn total(&self, keys: &SeriesKeys) -> f64 {
        keys.iter().map(|key| self.value_for(key)).sum()
    }
}

/// Ordered, caller-fixed list of series keys. Defines both stacking order
/// (first key on the baseline) and legend order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesKeys(Vec<String>);

impl SeriesKeys {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SeriesKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
