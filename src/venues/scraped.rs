use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::happy_hour_period::HappyHourPeriod;
use crate::types::nullable::null_as_default;
use crate::types::time_of_day::TimeValue;
use crate::types::weekly_schedule::WeeklySchedule;
use crate::venues::day_names::normalize_days;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DayNames {
    One(String),
    Many(Vec<String>),
}

impl Default for DayNames {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl DayNames {
    fn as_slice(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

/// A happy hour the way the extraction step reports it: free-form day names,
/// 24-hour `HH:MM` times.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedHappyHour {
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: DayNames,

    #[serde(default)]
    pub start_time: TimeValue,

    #[serde(default)]
    pub end_time: TimeValue,

    #[serde(default, deserialize_with = "null_as_default")]
    pub deals: Vec<String>,

    #[serde(default)]
    pub source_url: Option<String>,
}

impl ScrapedHappyHour {
    /// `None` when none of the day names are recognised.
    pub fn into_period(self) -> Option<HappyHourPeriod> {
        let days = normalize_days(self.days.as_slice());
        if days.is_empty() {
            return None;
        }

        Some(HappyHourPeriod {
            days,
            start_time: self.start_time,
            end_time: self.end_time,
            deals: self.deals,
            source_url: self.source_url,
        })
    }
}

pub fn schedule_from_scraped(happy_hours: Vec<ScrapedHappyHour>) -> WeeklySchedule {
    happy_hours
        .into_iter()
        .enumerate()
        .filter_map(|(index, happy_hour)| {
            let days = happy_hour.days.clone();
            let period = happy_hour.into_period();
            if period.is_none() {
                warn!(period = index, ?days, "dropping happy hour with no usable days");
            }
            period
        })
        .collect()
}

/// What the extraction step prints: `{"happyHours": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeOutput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub happy_hours: Vec<ScrapedHappyHour>,

    #[serde(default)]
    pub error: Option<String>,
}

impl ScrapeOutput {
    /// Accepts bare JSON or JSON inside a markdown code fence. A reply with
    /// neither is read as no happy hours found.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        let output = match serde_json::from_str::<ScrapeOutput>(trimmed) {
            Ok(output) => output,
            Err(error) => {
                let Some(fenced) = fenced_json(trimmed) else {
                    warn!(%error, "scrape output holds no JSON, treating as no happy hours");
                    return Ok(Self::default());
                };
                debug!("scrape output was wrapped in a code fence");
                serde_json::from_str(fenced).context("fenced scrape output is not valid JSON")?
            }
        };

        Ok(output)
    }

    pub fn into_schedule(self) -> Result<WeeklySchedule> {
        if let Some(error) = self.error {
            bail!("scraper reported an error: {error}");
        }

        Ok(schedule_from_scraped(self.happy_hours))
    }
}

fn fenced_json(raw: &str) -> Option<&str> {
    let (_, after_open) = raw.split_once("```")?;
    let body = after_open.strip_prefix("json").unwrap_or(after_open);
    let (body, _) = body.split_once("```")?;
    Some(body.trim())
}
