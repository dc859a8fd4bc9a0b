use brunn_core::classify::outcome::{CandidateDiseases, ScreeningResult};

pub fn print(result: &ScreeningResult, verbose: bool, alerts: bool) {
    let multi_report = result.reports.len() > 1;

    for (i, report) in result.reports.iter().enumerate() {
        if multi_report {
            if i > 0 {
                println!();
            }
            let label = report
                .header
                .village
                .as_deref()
                .or(report.header.source_id.as_deref())
                .unwrap_or("unknown");
            println!("--- Report: {} ---\n", label);
        }

        println!("  Water Quality: {}", report.water_status);
        println!("  Possible Diseases: {}", report.candidate_diseases);

        if verbose {
            if let CandidateDiseases::Matches(ref matches) = report.candidate_diseases {
                println!();
                for m in matches {
                    println!("    {}", m.reason);
                }
            }
        }

        if alerts {
            if let Some(alert) = report.alert_message() {
                println!("\n  {}", alert);
            }
        }
    }
}
