pub mod activity;

pub use activity::ActivityAnalysis;
pub use activity::ActivityProcessor;
