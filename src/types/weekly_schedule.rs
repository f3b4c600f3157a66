use serde::{Deserialize, Serialize};

use crate::types::day_code::DayCode;
use crate::types::happy_hour_period::HappyHourPeriod;

/// Periods in the order they were listed. A day may appear in any number of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(Vec<HappyHourPeriod>);

impl WeeklySchedule {
    pub fn new(periods: Vec<HappyHourPeriod>) -> Self {
        Self(periods)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn periods(&self) -> &[HappyHourPeriod] {
        &self.0
    }

    /// `(index, period)` for every period that runs on `day`, in list order.
    pub fn periods_on(&self, day: DayCode) -> impl Iterator<Item = (usize, &HappyHourPeriod)> {
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, period)| period.runs_on(day))
    }
}

impl From<Vec<HappyHourPeriod>> for WeeklySchedule {
    fn from(periods: Vec<HappyHourPeriod>) -> Self {
        Self::new(periods)
    }
}

impl FromIterator<HappyHourPeriod> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = HappyHourPeriod>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_on_keeps_list_order_and_original_indices() {
        let schedule = WeeklySchedule::new(vec![
            HappyHourPeriod::new([DayCode::Mon, DayCode::Tue], "15:00", "18:00"),
            HappyHourPeriod::new([DayCode::Wed], "15:00", "18:00"),
            HappyHourPeriod::new([DayCode::Tue], "21:00", "23:00"),
        ]);

        let indices: Vec<usize> = schedule.periods_on(DayCode::Tue).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(schedule.periods_on(DayCode::Sun).count(), 0);
    }

    #[test]
    fn deserializes_camel_case_periods() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"[{"days":["Fri","Sat"],"startTime":"16:00","endTime":1140,"deals":["$5 pints"]}]"#,
        )
        .unwrap();

        let period = &schedule.periods()[0];
        assert!(period.runs_on(DayCode::Sat));
        assert_eq!(period.deals, vec!["$5 pints".to_string()]);
        let (start, end) = period.window().unwrap();
        assert_eq!((start.as_u16(), end.as_u16()), (960, 1140));
    }

    #[test]
    fn missing_times_deserialize_but_have_no_window() {
        let schedule: WeeklySchedule = serde_json::from_str(r#"[{"days":["Mon"]}]"#).unwrap();
        assert_eq!(schedule.periods()[0].window(), None);
    }
}
