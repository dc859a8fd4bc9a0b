pub mod outcome;
pub mod symptoms;
pub mod water;

pub use outcome::{CandidateDiseases, DiagnosticResult, DiseaseMatch, ScreeningResult};
pub use symptoms::match_symptoms;
pub use water::classify;
