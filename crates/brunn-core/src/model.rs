use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary safety verdict for a water sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterStatus {
    Safe,
    Unsafe,
}

impl WaterStatus {
    pub fn is_safe(&self) -> bool {
        matches!(self, WaterStatus::Safe)
    }
}

impl fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterStatus::Safe => write!(f, "Safe"),
            WaterStatus::Unsafe => write!(f, "Unsafe"),
        }
    }
}

/// One set of readings taken from a water source.
///
/// The field form collects TDS and turbidity alongside pH, but the current
/// classifier only consumes pH. The extra readings are carried on the type
/// so reports round-trip them intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterReading {
    /// pH value. Not range-restricted at input; out-of-range and NaN
    /// readings classify as unsafe rather than erroring.
    pub ph: f64,
    /// Total dissolved solids in mg/L.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tds: Option<f64>,
    /// Turbidity in NTU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbidity: Option<f64>,
}

/// Where and when a field report was taken. All fields optional and
/// purely descriptive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportHeader {
    pub village: Option<String>,
    pub source_id: Option<String>,
    pub date: Option<String>,
}

/// A single report submitted from the field: a water reading plus the
/// free-text symptom description entered by the reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
    #[serde(default)]
    pub header: ReportHeader,
    pub reading: WaterReading,
    /// Free text, arbitrary casing, possibly empty.
    #[serde(default)]
    pub symptoms: String,
}
