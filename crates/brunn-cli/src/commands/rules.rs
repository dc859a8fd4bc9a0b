use brunn_core::rules::builtin;
use std::path::Path;

pub fn list() -> Result<(), brunn_core::error::BrunnError> {
    println!("Available predefined disease tables:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        println!("  {:<12} {} (v{})", name, table.name, table.version);
        if let Some(ref desc) = table.description {
            println!("               {}", desc);
        }
        println!("               {} diseases", table.diseases.len());
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), brunn_core::error::BrunnError> {
    let table = builtin::load_preset(preset)?;

    println!("{} (version {})\n", table.name, table.version);

    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!("A disease is listed as a candidate when any of its keywords");
    println!("appears anywhere in the reported symptom text. Candidates are");
    println!("shown in the order below; if nothing matches, the report gets");
    println!("the advisory \"No match. Consult a doctor.\"\n");

    // Print disease/keyword table
    let max_name_len = table
        .diseases
        .iter()
        .map(|d| d.disease.len())
        .max()
        .unwrap_or(20);

    println!("  {:<width$}  Keywords", "Disease", width = max_name_len + 2);
    println!("  {}", "-".repeat(max_name_len + 2 + 50));

    for rule in &table.diseases {
        println!(
            "  {:<width$}  {}",
            rule.disease,
            rule.keywords.join(", "),
            width = max_name_len + 2
        );
        if let Some(ref note) = rule.note {
            println!("  {:<width$}  ({})", "", note, width = max_name_len + 2);
        }
    }

    println!();

    Ok(())
}

pub fn schema() -> Result<(), brunn_core::error::BrunnError> {
    print!(
        r#"JSON Disease Table Schema
=========================

A table file defines the diseases the symptom matcher screens for. When you
run `brunn check`, the free-text symptom report is compared against each
disease's keywords to build the candidate list.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  diseases      (array, required)   Ordered list of disease entries (see
                                    below). Order matters: candidates are
                                    reported in this order.

Each entry in the "diseases" array:
  disease       (string, required)  Disease name, unique within the table.
  keywords      (array, required)   Non-empty list of lowercase keywords.
                                    A disease is a candidate when any keyword
                                    appears as a substring of the lowercased
                                    symptom report. Keywords must be given in
                                    lowercase or the file is rejected.
  note          (string, optional)  Clinical reference or explanation.

Example:
{{
  "name": "My outbreak watchlist",
  "description": "Symptoms seen around Site X this season",
  "version": "1.0",
  "diseases": [
    {{
      "disease": "Cholera",
      "keywords": ["diarrhea", "dehydration", "vomiting"]
    }},
    {{
      "disease": "Rotavirus",
      "keywords": ["watery diarrhea", "infant"],
      "note": "Mostly affects children under five"
    }}
  ]
}}

Matching is plain substring containment, not whole-word matching: a keyword
that occurs inside a longer word still counts.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), brunn_core::error::BrunnError> {
    let table = brunn_core::rules::load_table(file)?;

    println!("Disease table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Diseases: {}", table.diseases.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for rule in &table.diseases {
        for kw in &rule.keywords {
            for other in &table.diseases {
                if other.disease == rule.disease {
                    continue;
                }
                for other_kw in &other.keywords {
                    // A keyword contained in another disease's longer keyword
                    // always co-matches when the longer one appears.
                    if other_kw.len() > kw.len() && other_kw.contains(kw.as_str()) {
                        warnings.push(format!(
                            "keyword '{}' ({}) also matches whenever '{}' ({}) appears",
                            kw, rule.disease, other_kw, other.disease
                        ));
                    }
                }
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
