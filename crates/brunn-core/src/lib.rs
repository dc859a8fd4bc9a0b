pub mod classify;
pub mod error;
pub mod model;
pub mod parsing;
pub mod rules;

use classify::outcome::{DiagnosticResult, ScreeningResult};
use model::FieldReport;
use rules::schema::DiseaseTableDef;

/// Main API entry point: screen a single field report.
///
/// Runs the water classifier and the symptom matcher independently and
/// combines the two verdicts structurally. Both components are pure and
/// share no state, so this never fails.
pub fn evaluate(report: &FieldReport, table: &DiseaseTableDef) -> DiagnosticResult {
    DiagnosticResult {
        header: report.header.clone(),
        reading: report.reading.clone(),
        water_status: classify::water::classify(report.reading.ph),
        candidate_diseases: classify::symptoms::match_symptoms(&report.symptoms, table),
    }
}

/// Screen a batch of field reports, each evaluated independently.
pub fn evaluate_all(reports: &[FieldReport], table: &DiseaseTableDef) -> ScreeningResult {
    ScreeningResult {
        reports: reports.iter().map(|r| evaluate(r, table)).collect(),
    }
}

/// Screen a single field report against the built-in waterborne table.
pub fn evaluate_builtin(report: &FieldReport) -> DiagnosticResult {
    evaluate(report, &rules::builtin::WATERBORNE)
}
