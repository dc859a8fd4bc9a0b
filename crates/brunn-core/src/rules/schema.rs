use serde::{Deserialize, Serialize};

/// A table of diseases and the symptom keywords associated with each.
///
/// Declaration order is meaningful: candidate diseases are reported in the
/// order they appear here. The table is constant data once loaded; nothing
/// mutates it at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub diseases: Vec<DiseaseRuleDef>,
}

/// A single disease entry within a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRuleDef {
    /// Disease name, unique within the table.
    pub disease: String,
    /// Lowercase keywords matched as substrings of the symptom report.
    pub keywords: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}
