use brunn_core::classify::outcome::ScreeningResult;
use brunn_core::error::BrunnError;

pub fn print(result: &ScreeningResult) -> Result<(), BrunnError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
