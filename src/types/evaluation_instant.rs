use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime};

use crate::types::day_code::DayCode;
use crate::types::time_of_day::MinuteOfDay;

/// A point in the caller's local week. No timezone beyond the wall clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvaluationInstant {
    pub day: DayCode,
    pub minute: MinuteOfDay,
}

impl EvaluationInstant {
    pub fn new(day: DayCode, minute: MinuteOfDay) -> Self {
        Self { day, minute }
    }

    /// `None` when `hour`/`minute` are out of range.
    pub fn at(day: DayCode, hour: u16, minute: u16) -> Option<Self> {
        MinuteOfDay::from_hm(hour, minute).map(|minute| Self::new(day, minute))
    }

    pub fn local_now() -> Self {
        Self::from(Local::now().naive_local())
    }
}

impl From<NaiveDateTime> for EvaluationInstant {
    fn from(datetime: NaiveDateTime) -> Self {
        Self {
            day: datetime.weekday().into(),
            minute: datetime.time().into(),
        }
    }
}

impl fmt::Display for EvaluationInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn derives_day_and_minute_from_datetime() {
        // 2026-10-16 is a Friday
        let datetime = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(16, 45, 30)
            .unwrap();

        let instant = EvaluationInstant::from(datetime);
        assert_eq!(instant.day, DayCode::Fri);
        assert_eq!(instant.minute.as_u16(), 16 * 60 + 45);
        assert_eq!(instant.to_string(), "Fri 16:45");
    }

    #[test]
    fn rejects_out_of_range_parts() {
        assert!(EvaluationInstant::at(DayCode::Mon, 24, 0).is_none());
        assert!(EvaluationInstant::at(DayCode::Mon, 23, 59).is_some());
    }
}
