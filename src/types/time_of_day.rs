use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u16 = 1440;

/// Minutes since local midnight, always in `[0, 1440)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);
    pub const NOON: MinuteOfDay = MinuteOfDay(720);

    pub fn new(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Self::new(hour * 60 + minute)
    }

    pub fn as_u16(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Accepts `17:00`, `9:05`, `17:00:00`, `5pm`, `5:30 PM`, `5:30:00 PM`,
    /// `12am`, `noon` and `midnight`. `24:00` and `24:00:00` are read as midnight.
    pub fn parse(raw: &str) -> Option<Self> {
        let compact = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "" => return None,
            "noon" => return Some(Self::NOON),
            "midnight" | "24:00" | "24:00:00" => return Some(Self::MIDNIGHT),
            _ => {}
        }

        let meridiem = ["am", "pm"].into_iter().find(|m| compact.ends_with(m));
        let clock = meridiem.map_or(compact.as_str(), |m| &compact[..compact.len() - m.len()]);
        let clock = if clock.contains(':') {
            clock.to_string()
        } else {
            format!("{clock}:00")
        };

        let time = match meridiem {
            Some(m) => {
                let clock = format!("{clock}{m}");
                NaiveTime::parse_from_str(&clock, "%I:%M%p")
                    .or_else(|_| NaiveTime::parse_from_str(&clock, "%I:%M:%S%p"))
                    .ok()?
            }
            None => NaiveTime::parse_from_str(&clock, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(&clock, "%H:%M:%S"))
                .ok()?,
        };

        Some(Self::from(time))
    }
}

impl From<NaiveTime> for MinuteOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A `startTime`/`endTime` as it arrives on the wire. Resolved to a
/// [`MinuteOfDay`] only when a schedule is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Minutes(i64),
    Text(String),
    Invalid(serde_json::Value),
}

impl TimeValue {
    pub fn minute_of_day(&self) -> Option<MinuteOfDay> {
        match self {
            Self::Minutes(minutes) => u16::try_from(*minutes).ok().and_then(MinuteOfDay::new),
            Self::Text(text) => MinuteOfDay::parse(text),
            Self::Invalid(_) => None,
        }
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::Invalid(serde_json::Value::Null)
    }
}

impl From<MinuteOfDay> for TimeValue {
    fn from(minute: MinuteOfDay) -> Self {
        Self::Minutes(minute.as_u16() as i64)
    }
}

impl From<&str> for TimeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(minutes) => write!(f, "{minutes}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Invalid(value) => write!(f, "{value}"),
        }
    }
}
