use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MetricError {
    #[error("metric name is empty")]
    EmptyName,

    #[error("metric value is not finite: {value}")]
    NonFinite { value: f64 },
}

/// How a metric value should be read and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    /// A plain tally, such as enrolled students.
    Count,
    /// A percentage in `[0, 100]`, such as weekly attendance.
    Percent,
    /// A duration in minutes, such as average focus time.
    Minutes,
}

/// One named dashboard figure, already aggregated upstream.
///
/// Metrics arrive in presentation order from the directory and carry no
/// formatting; the overview screen decides how each unit is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    name: String,
    value: f64,
    unit: MetricUnit,
}

impl Metric {
    /// Build a metric, validating the name and value.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::EmptyName` if the name is blank and
    /// `MetricError::NonFinite` if the value is NaN or infinite.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        unit: MetricUnit,
    ) -> Result<Self, MetricError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MetricError::EmptyName);
        }
        if !value.is_finite() {
            return Err(MetricError::NonFinite { value });
        }
        Ok(Self { name, value, unit })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> MetricUnit {
        self.unit
    }
}
