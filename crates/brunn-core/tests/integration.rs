//! Integration tests for the evaluate() screening pipeline.
//!
//! Exercises the built-in waterborne preset end-to-end: JSON field reports
//! in, combined water/symptom verdicts out.

use brunn_core::classify::outcome::{CandidateDiseases, NO_MATCH_ADVICE};
use brunn_core::model::{FieldReport, ReportHeader, WaterReading, WaterStatus};
use brunn_core::rules::builtin::load_preset;
use brunn_core::rules::parse_table_str;
use brunn_core::{evaluate, evaluate_all, evaluate_builtin};

fn report(ph: f64, symptoms: &str) -> FieldReport {
    FieldReport {
        header: ReportHeader::default(),
        reading: WaterReading {
            ph,
            tds: None,
            turbidity: None,
        },
        symptoms: symptoms.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test 1: Safe reading with a single-disease symptom report
// ---------------------------------------------------------------------------
#[test]
fn safe_water_single_disease() {
    let table = load_preset("waterborne").unwrap();
    let result = evaluate(&report(7.2, "jaundice and fatigue"), &table);

    assert_eq!(result.water_status, WaterStatus::Safe);
    assert_eq!(result.candidate_diseases.names(), vec!["Hepatitis A"]);
    assert_eq!(
        result.summary(),
        "Water Quality: Safe\nPossible Diseases: Hepatitis A"
    );
}

// ---------------------------------------------------------------------------
// Test 2: Unsafe reading, no symptoms -> advisory line in the summary
// ---------------------------------------------------------------------------
#[test]
fn unsafe_water_no_symptoms() {
    let table = load_preset("waterborne").unwrap();
    let result = evaluate(&report(9.4, ""), &table);

    assert_eq!(result.water_status, WaterStatus::Unsafe);
    assert!(result.candidate_diseases.is_no_match());
    assert!(result.summary().contains(NO_MATCH_ADVICE));
}

// ---------------------------------------------------------------------------
// Test 3: Batch of reports evaluated independently
// ---------------------------------------------------------------------------
#[test]
fn batch_evaluated_independently() {
    let table = load_preset("waterborne").unwrap();
    let reports = vec![
        report(6.5, "diarrhea and vomiting with dehydration"),
        report(5.9, "xyz nonsense text"),
        report(8.5, "stomach cramps and diarrhea"),
    ];

    let result = evaluate_all(&reports, &table);

    assert_eq!(result.reports.len(), 3);
    assert_eq!(result.reports[0].water_status, WaterStatus::Safe);
    // "diarrhea" is shared, so Cholera's report also names the other
    // diarrhea diseases in table order.
    assert_eq!(
        result.reports[0].candidate_diseases.names(),
        vec!["Cholera", "Giardiasis", "E. coli Infection"]
    );
    assert_eq!(result.reports[1].water_status, WaterStatus::Unsafe);
    assert!(result.reports[1].candidate_diseases.is_no_match());
    assert_eq!(result.reports[2].water_status, WaterStatus::Safe);
    assert_eq!(
        result.reports[2].candidate_diseases.names(),
        vec!["Cholera", "Giardiasis", "E. coli Infection"]
    );
}

// ---------------------------------------------------------------------------
// Test 4: Unsafe reading produces an alert message, safe reading does not
// ---------------------------------------------------------------------------
#[test]
fn alert_message_for_unsafe_reading() {
    let table = load_preset("waterborne").unwrap();
    let field_report = FieldReport {
        header: ReportHeader {
            village: Some("Greenfield".into()),
            source_id: Some("WS-104".into()),
            date: Some("2025-06-12".into()),
        },
        reading: WaterReading {
            ph: 4.8,
            tds: Some(640.0),
            turbidity: Some(9.5),
        },
        symptoms: "vomiting".into(),
    };

    let result = evaluate(&field_report, &table);
    let alert = result.alert_message().expect("unsafe reading should alert");
    assert!(alert.contains("URGENT"));
    assert!(alert.contains("Greenfield"));
    assert!(alert.contains("pH: 4.8"));
    assert!(alert.contains("TDS: 640 mg/L"));
    assert!(alert.contains("Please investigate"));

    let safe = evaluate(&report(7.0, "vomiting"), &table);
    assert!(safe.alert_message().is_none());
}

// ---------------------------------------------------------------------------
// Test 5: NaN reading (unparsable field input) degrades to Unsafe
// ---------------------------------------------------------------------------
#[test]
fn nan_reading_is_unsafe() {
    let table = load_preset("waterborne").unwrap();
    let result = evaluate(&report(f64::NAN, "fever"), &table);

    assert_eq!(result.water_status, WaterStatus::Unsafe);
    // Symptom matching is unaffected by the bad reading.
    assert_eq!(
        result.candidate_diseases.names(),
        vec!["Typhoid", "Dysentery"]
    );
}

// ---------------------------------------------------------------------------
// Test 6: Field reports load from the JSON the CLI accepts
// ---------------------------------------------------------------------------
#[test]
fn field_reports_load_from_json() {
    let json = r#"[
        {
            "header": { "village": "Red Valley", "source_id": "WS-7", "date": "2025-06-01" },
            "reading": { "ph": 7.8, "tds": 310.0 },
            "symptoms": "jaundice and fatigue"
        },
        {
            "reading": { "ph": 10.1 }
        }
    ]"#;

    let reports: Vec<FieldReport> = serde_json::from_str(json).unwrap();
    let table = load_preset("waterborne").unwrap();
    let result = evaluate_all(&reports, &table);

    assert_eq!(result.reports[0].water_status, WaterStatus::Safe);
    assert_eq!(
        result.reports[0].candidate_diseases.names(),
        vec!["Hepatitis A"]
    );
    assert_eq!(result.reports[0].reading.tds, Some(310.0));

    assert_eq!(result.reports[1].water_status, WaterStatus::Unsafe);
    assert!(result.reports[1].candidate_diseases.is_no_match());
}

// ---------------------------------------------------------------------------
// Test 7: Custom table replaces the preset
// ---------------------------------------------------------------------------
#[test]
fn custom_table_used_for_matching() {
    let json = r#"{
        "name": "Site tracker",
        "version": "2025.1",
        "diseases": [
            { "disease": "Rotavirus", "keywords": ["watery diarrhea", "infant"] },
            { "disease": "Cryptosporidiosis", "keywords": ["cramps", "weight loss"] }
        ]
    }"#;
    let table = parse_table_str(json).unwrap();

    let result = evaluate(&report(7.0, "severe cramps and weight loss"), &table);
    assert_eq!(
        result.candidate_diseases.names(),
        vec!["Cryptosporidiosis"]
    );
}

// ---------------------------------------------------------------------------
// Test 8: evaluate_builtin agrees with an explicitly loaded preset
// ---------------------------------------------------------------------------
#[test]
fn builtin_entry_point_matches_preset() {
    let table = load_preset("waterborne").unwrap();
    let input = report(7.2, "fever and headache");

    let via_builtin = evaluate_builtin(&input);
    let via_preset = evaluate(&input, &table);

    assert_eq!(via_builtin.water_status, via_preset.water_status);
    assert_eq!(via_builtin.candidate_diseases, via_preset.candidate_diseases);
}

// ---------------------------------------------------------------------------
// Test 9: Results serialize to JSON with the advisory sentinel intact
// ---------------------------------------------------------------------------
#[test]
fn screening_result_serializes() {
    let table = load_preset("waterborne").unwrap();
    let result = evaluate_all(&[report(7.0, ""), report(7.0, "fever")], &table);

    let json = serde_json::to_string_pretty(&result).unwrap();
    assert!(json.contains("no_match"));
    assert!(json.contains("Typhoid"));

    match &result.reports[1].candidate_diseases {
        CandidateDiseases::Matches(matches) => assert_eq!(matches[0].disease, "Typhoid"),
        CandidateDiseases::NoMatch => panic!("expected Typhoid match"),
    }
}
