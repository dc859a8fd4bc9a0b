pub mod builtin;
pub mod schema;

use crate::error::BrunnError;
use schema::DiseaseTableDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a disease table from a JSON file.
pub fn load_table(path: &Path) -> Result<DiseaseTableDef, BrunnError> {
    let content = std::fs::read_to_string(path).map_err(|e| BrunnError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a disease table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<DiseaseTableDef, BrunnError> {
    let table: DiseaseTableDef = serde_json::from_str(json).map_err(|e| BrunnError::TableLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a disease table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<DiseaseTableDef, BrunnError> {
    let table: DiseaseTableDef = serde_json::from_str(json).map_err(BrunnError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a disease table is well-formed.
///
/// Runs at load time, before the table reaches the matcher, so matching
/// itself never has an error path: no duplicate disease names, no empty
/// keyword sets, and every keyword already lowercase (the report is
/// lowercased before containment checks, so an uppercase keyword could
/// never match anything).
pub fn validate_table(table: &DiseaseTableDef) -> Result<(), BrunnError> {
    if table.diseases.is_empty() {
        return Err(BrunnError::TableInvalid("diseases must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for rule in &table.diseases {
        if rule.disease.is_empty() {
            return Err(BrunnError::TableInvalid(
                "disease name must not be empty".into(),
            ));
        }

        if !seen.insert(rule.disease.as_str()) {
            return Err(BrunnError::TableInvalid(format!(
                "duplicate disease '{}'",
                rule.disease
            )));
        }

        if rule.keywords.is_empty() {
            return Err(BrunnError::TableInvalid(format!(
                "disease '{}' has no keywords",
                rule.disease
            )));
        }

        for kw in &rule.keywords {
            if kw.is_empty() {
                return Err(BrunnError::TableInvalid(format!(
                    "disease '{}' has an empty keyword",
                    rule.disease
                )));
            }

            if *kw != kw.to_lowercase() {
                return Err(BrunnError::TableInvalid(format!(
                    "keyword '{}' for disease '{}' must be lowercase",
                    kw, rule.disease
                )));
            }
        }
    }

    Ok(())
}
