//! Status classification properties over plain, wrapping and multi-period
//! schedules. Every instant is built explicitly; nothing reads the real clock.

use happyhour::*;

fn at(day: DayCode, hour: u16, minute: u16) -> EvaluationInstant {
    EvaluationInstant::at(day, hour, minute).unwrap()
}

fn every_minute_of_the_week() -> impl Iterator<Item = EvaluationInstant> {
    DayCode::ALL.into_iter().flat_map(|day| {
        (0..1440).map(move |minute| EvaluationInstant::new(day, MinuteOfDay::new(minute).unwrap()))
    })
}

fn weekday_evenings() -> WeeklySchedule {
    WeeklySchedule::new(vec![HappyHourPeriod::new(
        [DayCode::Mon, DayCode::Tue, DayCode::Wed, DayCode::Thu, DayCode::Fri],
        "17:00",
        "19:00",
    )])
}

#[test]
fn empty_schedule_is_closed_at_every_instant() {
    let schedule = WeeklySchedule::default();
    let thresholds = StatusThresholds::default();

    for instant in every_minute_of_the_week() {
        assert_eq!(evaluate_status(&schedule, instant, thresholds), Status::Closed);
    }
}

#[test]
fn plain_period_is_active_then_ending_soon() {
    let schedule = weekday_evenings();
    let thresholds = StatusThresholds::default();
    let (start, end) = (17 * 60, 19 * 60);

    for now in start..end {
        let instant = EvaluationInstant::new(DayCode::Wed, MinuteOfDay::new(now).unwrap());
        let expected = if end - now > thresholds.ending_soon_minutes {
            Status::Active
        } else {
            Status::EndingSoon
        };
        assert_eq!(evaluate_status(&schedule, instant, thresholds), expected, "at minute {now}");
    }
}

#[test]
fn wraparound_period_is_active_before_midnight() {
    let schedule = WeeklySchedule::new(vec![HappyHourPeriod::new([DayCode::Sat], "22:00", "02:00")]);

    assert_eq!(
        evaluate_status(&schedule, at(DayCode::Sat, 23, 30), StatusThresholds::default()),
        Status::Active
    );
}

#[test]
fn wraparound_period_is_ending_soon_after_midnight() {
    let schedule = WeeklySchedule::new(vec![HappyHourPeriod::new([DayCode::Sat], "22:00", "02:00")]);

    assert_eq!(
        evaluate_status(&schedule, at(DayCode::Sat, 1, 45), StatusThresholds::new(30, 30)),
        Status::EndingSoon
    );
}

#[test]
fn starting_soon_within_threshold() {
    assert_eq!(
        evaluate_status(
            &weekday_evenings(),
            at(DayCode::Mon, 16, 45),
            StatusThresholds::new(30, 30)
        ),
        Status::StartingSoon
    );
}

#[test]
fn finished_lunch_period_does_not_hide_upcoming_evening() {
    let schedule = WeeklySchedule::new(vec![
        HappyHourPeriod::new([DayCode::Thu], "12:00", "13:00"),
        HappyHourPeriod::new([DayCode::Thu], "17:00", "19:00"),
    ]);

    assert_eq!(
        evaluate_status(&schedule, at(DayCode::Thu, 16, 45), StatusThresholds::default()),
        Status::StartingSoon
    );
}

#[test]
fn in_progress_period_beats_any_starting_soon_candidate() {
    let schedule = WeeklySchedule::new(vec![
        HappyHourPeriod::new([DayCode::Thu], "17:00", "19:00"),
        HappyHourPeriod::new([DayCode::Thu], "16:00", "18:00"),
    ]);

    assert_eq!(
        evaluate_status(&schedule, at(DayCode::Thu, 16, 45), StatusThresholds::default()),
        Status::Active
    );
}

#[test]
fn repeated_evaluation_is_identical() {
    let evaluator = StatusEvaluator::new(StatusThresholds::new(60, 30));
    let schedule = WeeklySchedule::new(vec![
        HappyHourPeriod::new([DayCode::Fri], "22:00", "02:00"),
        HappyHourPeriod::new([DayCode::Fri], "15:00", "18:00"),
    ]);

    for instant in every_minute_of_the_week() {
        assert_eq!(evaluator.report(&schedule, instant), evaluator.report(&schedule, instant));
    }
}

#[test]
fn evaluation_from_many_threads_agrees() {
    let evaluator = StatusEvaluator::default();
    let schedule = weekday_evenings();
    let instant = at(DayCode::Tue, 18, 40);

    let results: Vec<Status> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| evaluator.evaluate(&schedule, instant)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|status| *status == Status::EndingSoon));
}

#[test]
fn numeric_minutes_and_clock_strings_agree() {
    let textual = WeeklySchedule::new(vec![HappyHourPeriod::new([DayCode::Sun], "5pm", "7:00 PM")]);
    let numeric = WeeklySchedule::new(vec![HappyHourPeriod::new(
        [DayCode::Sun],
        TimeValue::Minutes(1020),
        TimeValue::Minutes(1140),
    )]);
    let thresholds = StatusThresholds::default();

    for minute in (0..1440).step_by(5) {
        let instant = EvaluationInstant::new(DayCode::Sun, MinuteOfDay::new(minute).unwrap());
        assert_eq!(
            evaluate_status(&textual, instant, thresholds),
            evaluate_status(&numeric, instant, thresholds)
        );
    }
}
