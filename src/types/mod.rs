pub mod day_code;
pub mod evaluation_instant;
pub mod happy_hour_period;
pub mod nullable;
pub mod status;
pub mod time_of_day;
pub mod weekly_schedule;
