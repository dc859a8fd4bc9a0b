use crate::error::BrunnError;
use crate::rules::schema::DiseaseTableDef;
use std::sync::LazyLock;

const WATERBORNE_JSON: &str = include_str!("../../../../rules/waterborne-diseases.json");

/// Available predefined disease tables.
pub const PRESETS: &[&str] = &["waterborne"];

/// The built-in table, parsed and validated once per process. It is
/// compiled-in constant data with no mutation API, so a malformed file is a
/// build defect and fails at first use.
pub static WATERBORNE: LazyLock<DiseaseTableDef> =
    LazyLock::new(|| load_preset("waterborne").expect("built-in waterborne table is malformed"));

/// Load a predefined disease table by name.
pub fn load_preset(name: &str) -> Result<DiseaseTableDef, BrunnError> {
    match name {
        "waterborne" => {
            let table: DiseaseTableDef = serde_json::from_str(WATERBORNE_JSON)?;
            crate::rules::validate_table(&table)?;
            Ok(table)
        }
        _ => Err(BrunnError::TableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
