use crate::classify::outcome::{CandidateDiseases, DiseaseMatch};
use crate::parsing::normalize_report;
use crate::rules::schema::DiseaseTableDef;

/// Match a free-text symptom report against a disease table.
///
/// A disease is a candidate when any of its keywords appears as a substring
/// of the lowercased report. Containment is deliberate and matches anywhere,
/// including inside longer words; there is no tokenization and no ranking.
/// Candidates come back in table order, each disease at most once no matter
/// how many of its keywords hit.
pub fn match_symptoms(report: &str, table: &DiseaseTableDef) -> CandidateDiseases {
    let normalized = normalize_report(report);

    let mut matches = Vec::new();
    for rule in &table.diseases {
        let hits: Vec<String> = rule
            .keywords
            .iter()
            .filter(|kw| normalized.contains(kw.as_str()))
            .cloned()
            .collect();

        if hits.is_empty() {
            continue;
        }

        let quoted: Vec<String> = hits.iter().map(|kw| format!("'{kw}'")).collect();
        matches.push(DiseaseMatch {
            reason: format!("{}: report contains {}", rule.disease, quoted.join(", ")),
            disease: rule.disease.clone(),
            matched_keywords: hits,
        });
    }

    if matches.is_empty() {
        CandidateDiseases::NoMatch
    } else {
        CandidateDiseases::Matches(matches)
    }
}
