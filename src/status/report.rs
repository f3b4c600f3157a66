use serde::Serialize;

use crate::types::status::Status;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: Status,

    /// Index into the schedule of the period that decided the status.
    pub period_index: Option<usize>,

    /// Minutes until the deciding period ends (in progress) or starts (starting soon).
    pub minutes_until_change: Option<u16>,
}

impl StatusReport {
    pub fn closed() -> Self {
        Self {
            status: Status::Closed,
            period_index: None,
            minutes_until_change: None,
        }
    }

    pub(crate) fn decided(status: Status, period_index: usize, minutes_until_change: u16) -> Self {
        Self {
            status,
            period_index: Some(period_index),
            minutes_until_change: Some(minutes_until_change),
        }
    }
}
