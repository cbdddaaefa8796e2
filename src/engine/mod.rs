pub mod mizan;

pub use mizan::AnalysisOutcome;
pub use mizan::Mizan;
