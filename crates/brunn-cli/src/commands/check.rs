use brunn_core::error::BrunnError;
use brunn_core::model::{FieldReport, ReportHeader, WaterReading};
use brunn_core::parsing::parse_ph_loose;
use brunn_core::rules::schema::DiseaseTableDef;
use brunn_core::rules::{builtin, load_table};
use std::path::PathBuf;

use crate::output;

#[derive(clap::Args)]
pub struct CheckArgs {
    /// JSON file with an array of field reports (alternative to the inline flags)
    pub input_file: Option<PathBuf>,

    /// pH reading as entered in the field form (non-numeric input classifies as unsafe)
    #[arg(long)]
    pub ph: Option<String>,

    /// Total dissolved solids in mg/L (recorded but not used for the verdict)
    #[arg(long)]
    pub tds: Option<f64>,

    /// Turbidity in NTU (recorded but not used for the verdict)
    #[arg(long)]
    pub turbidity: Option<f64>,

    /// Free-text symptom description (e.g., "fever, diarrhea")
    #[arg(long)]
    pub symptoms: Option<String>,

    /// Village name for the report header
    #[arg(long)]
    pub village: Option<String>,

    /// Water source identifier for the report header
    #[arg(long)]
    pub source: Option<String>,

    /// Report date for the report header
    #[arg(long)]
    pub date: Option<String>,

    /// Custom JSON disease table (overrides --preset)
    #[arg(short, long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Predefined disease table
    #[arg(short, long, default_value = "waterborne")]
    pub preset: String,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Show per-disease matched keywords
    #[arg(long)]
    pub verbose: bool,

    /// Print the urgent alert text for unsafe readings
    #[arg(long)]
    pub alerts: bool,
}

pub fn run(args: CheckArgs) -> Result<(), BrunnError> {
    let table: DiseaseTableDef = match &args.rules {
        Some(path) => load_table(path)?,
        None => builtin::load_preset(&args.preset)?,
    };

    let reports = gather_reports(&args)?;
    let result = brunn_core::evaluate_all(&reports, &table);

    match args.output.as_str() {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, args.verbose, args.alerts),
    }

    Ok(())
}

fn gather_reports(args: &CheckArgs) -> Result<Vec<FieldReport>, BrunnError> {
    if let Some(path) = &args.input_file {
        let bytes = std::fs::read(path)?;
        let reports: Vec<FieldReport> =
            serde_json::from_slice(&bytes).map_err(|e| BrunnError::InputLoad {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        return Ok(reports);
    }

    // Inline flags form a single report. The pH field arrives as text and is
    // parsed loosely; a missing or unparsable value becomes NaN, which the
    // classifier reports as unsafe.
    let ph = args
        .ph
        .as_deref()
        .map(parse_ph_loose)
        .unwrap_or(f64::NAN);

    Ok(vec![FieldReport {
        header: ReportHeader {
            village: args.village.clone(),
            source_id: args.source.clone(),
            date: args.date.clone(),
        },
        reading: WaterReading {
            ph,
            tds: args.tds,
            turbidity: args.turbidity,
        },
        symptoms: args.symptoms.clone().unwrap_or_default(),
    }])
}
