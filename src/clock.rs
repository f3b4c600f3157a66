use crate::types::evaluation_instant::EvaluationInstant;

/// Where the "current instant" comes from.
pub trait Clock {
    fn now(&self) -> EvaluationInstant;
}

/// The caller's local wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> EvaluationInstant {
        EvaluationInstant::local_now()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub EvaluationInstant);

impl Clock for FixedClock {
    fn now(&self) -> EvaluationInstant {
        self.0
    }
}
