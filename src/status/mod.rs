pub mod evaluator;
pub mod report;
pub mod thresholds;

pub use evaluator::{StatusEvaluator, evaluate_status};
pub use report::StatusReport;
pub use thresholds::StatusThresholds;
