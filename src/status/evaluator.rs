use tracing::{trace, warn};

use crate::status::report::StatusReport;
use crate::status::thresholds::StatusThresholds;
use crate::types::evaluation_instant::EvaluationInstant;
use crate::types::status::Status;
use crate::types::time_of_day::MINUTES_PER_DAY;
use crate::types::weekly_schedule::WeeklySchedule;

/// Classifies a weekly schedule at an instant. Holds no state besides its thresholds.
#[derive(Debug, Copy, Clone, Default)]
pub struct StatusEvaluator {
    thresholds: StatusThresholds,
}

impl StatusEvaluator {
    pub fn new(thresholds: StatusThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> StatusThresholds {
        self.thresholds
    }

    pub fn evaluate(&self, schedule: &WeeklySchedule, instant: EvaluationInstant) -> Status {
        self.report(schedule, instant).status
    }

    /// The first of today's periods that is in progress decides the result.
    /// Otherwise the first one starting within the threshold does, and failing
    /// both the venue is closed.
    pub fn report(&self, schedule: &WeeklySchedule, instant: EvaluationInstant) -> StatusReport {
        if schedule.is_empty() {
            return StatusReport::closed();
        }

        let now = instant.minute.as_u16();
        let mut starting_soon: Option<StatusReport> = None;

        for (index, period) in schedule.periods_on(instant.day) {
            let Some((start, end)) = period.window() else {
                warn!(
                    period = index,
                    start = %period.start_time,
                    end = %period.end_time,
                    "skipping happy hour period with unparseable time"
                );
                continue;
            };
            let (start, end) = (start.as_u16(), end.as_u16());

            if is_within_period(start, end, now) {
                let remaining = if end > now {
                    end - now
                } else {
                    (MINUTES_PER_DAY - now) + end
                };

                let status = if remaining <= self.thresholds.ending_soon_minutes {
                    Status::EndingSoon
                } else {
                    Status::Active
                };

                trace!(period = index, %status, remaining, "period in progress");
                return StatusReport::decided(status, index, remaining);
            }

            if starting_soon.is_some() {
                continue;
            }

            let until_start = if start >= now {
                start - now
            } else {
                (MINUTES_PER_DAY - now) + start
            };

            if until_start <= self.thresholds.starting_soon_minutes {
                starting_soon = Some(StatusReport::decided(
                    Status::StartingSoon,
                    index,
                    until_start,
                ));
            }
        }

        starting_soon.unwrap_or_else(StatusReport::closed)
    }
}

/// `evaluate` with explicit thresholds, for callers that hold no evaluator.
pub fn evaluate_status(
    schedule: &WeeklySchedule,
    instant: EvaluationInstant,
    thresholds: StatusThresholds,
) -> Status {
    StatusEvaluator::new(thresholds).evaluate(schedule, instant)
}

/// `end <= start` means the period wraps past midnight.
fn is_within_period(start: u16, end: u16, now: u16) -> bool {
    if end > start {
        now >= start && now < end
    } else {
        now >= start || now < end
    }
}
