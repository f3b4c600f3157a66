use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::day_code::DayCode;
use crate::types::nullable::null_as_default;
use crate::types::time_of_day::{MinuteOfDay, TimeValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HappyHourPeriod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: BTreeSet<DayCode>,

    #[serde(default)]
    pub start_time: TimeValue,

    /// May be earlier than `start_time`, in which case the period runs past midnight.
    #[serde(default)]
    pub end_time: TimeValue,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub deals: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl HappyHourPeriod {
    pub fn new(
        days: impl IntoIterator<Item = DayCode>,
        start_time: impl Into<TimeValue>,
        end_time: impl Into<TimeValue>,
    ) -> Self {
        Self {
            days: days.into_iter().collect(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            deals: Vec::new(),
            source_url: None,
        }
    }

    pub fn with_deals(mut self, deals: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.deals = deals.into_iter().map(Into::into).collect();
        self
    }

    pub fn runs_on(&self, day: DayCode) -> bool {
        self.days.contains(&day)
    }

    /// Both endpoints, or `None` if either fails to parse.
    pub fn window(&self) -> Option<(MinuteOfDay, MinuteOfDay)> {
        Some((self.start_time.minute_of_day()?, self.end_time.minute_of_day()?))
    }
}
