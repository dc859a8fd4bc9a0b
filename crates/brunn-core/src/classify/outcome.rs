use crate::model::{ReportHeader, WaterReading, WaterStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory text shown when no disease keywords were found in the report.
pub const NO_MATCH_ADVICE: &str = "No match. Consult a doctor.";

/// A single disease whose keywords were found in the symptom report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseMatch {
    /// Disease name as declared in the table.
    pub disease: String,
    /// Which of the disease's keywords were found.
    pub matched_keywords: Vec<String>,
    /// Human-readable explanation of the match.
    pub reason: String,
}

/// Candidate diseases from symptom matching.
///
/// `Matches` is never empty; the empty case is represented by `NoMatch` so
/// renderers always have an advisory line to print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateDiseases {
    Matches(Vec<DiseaseMatch>),
    NoMatch,
}

impl CandidateDiseases {
    /// Disease names in table order. Empty for `NoMatch`.
    pub fn names(&self) -> Vec<&str> {
        match self {
            CandidateDiseases::Matches(matches) => {
                matches.iter().map(|m| m.disease.as_str()).collect()
            }
            CandidateDiseases::NoMatch => Vec::new(),
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, CandidateDiseases::NoMatch)
    }
}

impl fmt::Display for CandidateDiseases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateDiseases::Matches(_) => write!(f, "{}", self.names().join(", ")),
            CandidateDiseases::NoMatch => write!(f, "{NO_MATCH_ADVICE}"),
        }
    }
}

/// Combined screening outcome for one field report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub header: ReportHeader,
    pub reading: WaterReading,
    pub water_status: WaterStatus,
    pub candidate_diseases: CandidateDiseases,
}

impl DiagnosticResult {
    /// The two-line report shown back to the person who submitted the
    /// reading.
    pub fn summary(&self) -> String {
        format!(
            "Water Quality: {}\nPossible Diseases: {}",
            self.water_status, self.candidate_diseases
        )
    }

    /// Urgent notification text for officials when a source tests unsafe.
    ///
    /// Only builds the message; delivering it (SMS or otherwise) is up to
    /// the caller.
    pub fn alert_message(&self) -> Option<String> {
        if self.water_status.is_safe() {
            return None;
        }

        let village = self.header.village.as_deref().unwrap_or("N/A");
        let mut details = format!("pH: {}", self.reading.ph);
        if let Some(tds) = self.reading.tds {
            details.push_str(&format!(", TDS: {tds} mg/L"));
        }
        if let Some(turbidity) = self.reading.turbidity {
            details.push_str(&format!(", Turbidity: {turbidity} NTU"));
        }

        Some(format!(
            "URGENT: Unsafe water quality reported in {village}. Details - {details}. Please investigate."
        ))
    }
}

/// Screening outcome across a batch of field reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub reports: Vec<DiagnosticResult>,
}
