pub mod clock;
pub mod config;
pub mod status;
pub mod types;
pub mod venues;

pub use status::{StatusEvaluator, StatusReport, StatusThresholds, evaluate_status};
pub use types::{
    day_code::DayCode, evaluation_instant::EvaluationInstant, happy_hour_period::HappyHourPeriod,
    status::Status, time_of_day::MinuteOfDay, time_of_day::TimeValue,
    weekly_schedule::WeeklySchedule,
};
